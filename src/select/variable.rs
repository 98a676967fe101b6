use oorandom::Rand64;

use super::VariableSelector;
use crate::csp::{Assignment, CspValue, Problem, VarId};
use crate::propagate::CspPropagator;

/// Fail-first strategy: picks the unassigned variable with the smallest current domain.
/// Ties are broken by problem declaration order, matching `Iterator::min_by_key`'s
/// first-element-wins behavior.
pub struct SmallestDomainSelector;

impl<V: CspValue> VariableSelector<V> for SmallestDomainSelector {
    fn select(
        &mut self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        propagator: &dyn CspPropagator<V>,
    ) -> Option<VarId> {
        problem
            .variable_ids()
            .into_iter()
            .filter(|&var| !assignment.is_assigned(var))
            .min_by_key(|&var| propagator.current_domain(var).len())
    }
}

/// Picks uniformly at random among the unassigned variables.
pub struct UniformRandomSelector {
    rng: Rand64,
}

impl UniformRandomSelector {
    pub fn new(rng: Rand64) -> Self {
        Self { rng }
    }
}

impl<V: CspValue> VariableSelector<V> for UniformRandomSelector {
    fn select(
        &mut self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        _propagator: &dyn CspPropagator<V>,
    ) -> Option<VarId> {
        let unassigned: Vec<VarId> = problem
            .variable_ids()
            .into_iter()
            .filter(|&var| !assignment.is_assigned(var))
            .collect();

        if unassigned.is_empty() {
            return None;
        }

        let index = (self.rng.rand_u64() as usize) % unassigned.len();
        Some(unassigned[index])
    }
}

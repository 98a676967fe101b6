pub mod value;
pub mod variable;

pub use value::RouletteSelector;
pub use variable::{SmallestDomainSelector, UniformRandomSelector};

use crate::colony::ACOParameters;
use crate::csp::{Assignment, CspValue, Problem, VarId};
use crate::error::SelectorError;
use crate::pheromone::PheromoneMatrix;
use crate::propagate::CspPropagator;

/// A problem-specific heuristic `eta(x)`. Defaults to `default_heuristic`, which returns
/// `1.0` for every candidate (pure-pheromone mode, per the engine's non-goal of not
/// enforcing any problem-specific heuristic).
pub type Heuristic<V> = fn(&V) -> f64;

pub fn default_heuristic<V>(_value: &V) -> f64 {
    1.0
}

/// Samples a value from a variable's current reduced domain, weighted by
/// `tau(v, x)^alpha * eta(v, x)^beta`.
pub trait ValueSelector<V: CspValue> {
    fn select(
        &mut self,
        var: VarId,
        domain: &[V],
        pheromones: &PheromoneMatrix<V>,
        params: &ACOParameters,
    ) -> Result<Option<V>, SelectorError>;
}

/// Picks the next unassigned variable to decide on, or `None` if every variable is assigned.
pub trait VariableSelector<V: CspValue> {
    fn select(
        &mut self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        propagator: &dyn CspPropagator<V>,
    ) -> Option<VarId>;
}

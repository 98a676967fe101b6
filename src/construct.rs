use crate::colony::ACOParameters;
use crate::csp::{Assignment, CspValue, Problem, VarId};
use crate::error::SelectorError;
use crate::pheromone::PheromoneMatrix;
use crate::propagate::CspPropagator;
use crate::select::{ValueSelector, VariableSelector};

/// Walks a single ant's construction of an assignment: repeatedly picks a variable, draws a
/// value for it, assigns, and propagates. Statically dispatched over its variable selector,
/// value selector and propagator so the hot construction loop never pays for a vtable call.
pub struct AssignmentConstructor<V, VS, ZS, P>
where
    V: CspValue,
    VS: VariableSelector<V>,
    ZS: ValueSelector<V>,
    P: CspPropagator<V>,
{
    variable_selector: VS,
    value_selector: ZS,
    propagator: P,
    _marker: std::marker::PhantomData<V>,
}

impl<V, VS, ZS, P> AssignmentConstructor<V, VS, ZS, P>
where
    V: CspValue,
    VS: VariableSelector<V>,
    ZS: ValueSelector<V>,
    P: CspPropagator<V>,
{
    pub fn new(variable_selector: VS, value_selector: ZS, propagator: P) -> Self {
        Self {
            variable_selector,
            value_selector,
            propagator,
            _marker: std::marker::PhantomData,
        }
    }

    /// Builds one assignment. Returns it whether or not it is complete: forward-checking
    /// wipeout or no-candidate stop the walk early and the partial assignment built so far is
    /// handed back, never surfaced as an error. Any remaining singleton variables are closed
    /// immediately after every propagation before a new variable is selected, so a chain of
    /// forced assignments never waits for its own turn in the selection order.
    ///
    /// Weight degeneracy (`SelectorError::AllWeightsZero`) is a fatal invariant violation, not
    /// a search failure — it is propagated to the caller rather than absorbed into a partial
    /// assignment.
    pub fn construct(
        &mut self,
        problem: &Problem<V>,
        pheromones: &PheromoneMatrix<V>,
        params: &ACOParameters,
    ) -> Result<Assignment<V>, SelectorError> {
        self.propagator.reset();
        let mut assignment = Assignment::new();

        loop {
            if !self.close_singletons(&mut assignment) {
                break;
            }

            let var = match self
                .variable_selector
                .select(problem, &assignment, &self.propagator)
            {
                Some(var) => var,
                None => break,
            };

            if !self.decide(var, problem, &mut assignment, pheromones, params)? {
                break;
            }
        }

        Ok(assignment)
    }

    /// Assigns a value to every currently-singleton unassigned variable and propagates each
    /// one in turn. Returns `false` on wipeout.
    fn close_singletons(&mut self, assignment: &mut Assignment<V>) -> bool {
        loop {
            let forced: Vec<VarId> = self
                .propagator
                .singleton_variables()
                .into_iter()
                .filter(|&var| !assignment.is_assigned(var))
                .collect();

            if forced.is_empty() {
                return true;
            }

            for var in forced {
                let value = self.propagator.current_domain(var)[0].clone();
                assignment.assign(var, value);
                if !self.propagator.propagate(assignment) {
                    return false;
                }
            }
        }
    }

    /// Draws a value for `var` from its current reduced domain, assigns it, and propagates.
    /// Returns `Ok(false)` if the domain is empty or propagation fails (both local search
    /// failures); returns `Err` if the roulette wheel's weights are all zero, which is a
    /// fatal invariant violation (§7 category 3) rather than something the walk can absorb.
    fn decide(
        &mut self,
        var: VarId,
        _problem: &Problem<V>,
        assignment: &mut Assignment<V>,
        pheromones: &PheromoneMatrix<V>,
        params: &ACOParameters,
    ) -> Result<bool, SelectorError> {
        let domain = self.propagator.current_domain(var).to_vec();
        let chosen = match self.value_selector.select(var, &domain, pheromones, params)? {
            Some(value) => value,
            None => return Ok(false),
        };

        assignment.assign(var, chosen);
        Ok(self.propagator.propagate(assignment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::{AllDifferent, NotEqual, Variable};
    use crate::propagate::ForwardCheckingPropagator;
    use crate::rng::rng64;
    use crate::select::{RouletteSelector, SmallestDomainSelector};

    fn params() -> ACOParameters {
        ACOParameters::new(1.0, 1.0, 0.1, 0.01, 10.0, 4).unwrap()
    }

    #[test]
    fn constructs_a_complete_solution_for_a_satisfiable_problem() {
        let a = Variable::new("A", vec![1, 2, 3]).unwrap();
        let b = Variable::new("B", vec![1, 2, 3]).unwrap();
        let c = Variable::new("C", vec![1, 2, 3]).unwrap();
        let problem = Problem::new(
            vec![a, b, c],
            vec![Box::new(AllDifferent::new(vec![
                VarId(0),
                VarId(1),
                VarId(2),
            ]))],
        )
        .unwrap();

        let pheromones = PheromoneMatrix::initialize(&problem, 1.0).unwrap();
        let mut constructor = AssignmentConstructor::new(
            SmallestDomainSelector,
            RouletteSelector::new(rng64(1), crate::select::default_heuristic),
            ForwardCheckingPropagator::new(&problem),
        );

        let assignment = constructor.construct(&problem, &pheromones, &params()).unwrap();
        assert!(assignment.is_complete(problem.variables().len()));
        assert!(problem.is_solution(&assignment));
    }

    #[test]
    fn stops_early_on_domain_wipeout() {
        let x = Variable::new("X", vec![1]).unwrap();
        let y = Variable::new("Y", vec![1]).unwrap();
        let problem = Problem::new(
            vec![x, y],
            vec![Box::new(NotEqual::new(VarId(0), VarId(1)))],
        )
        .unwrap();

        let pheromones = PheromoneMatrix::initialize(&problem, 1.0).unwrap();
        let mut constructor = AssignmentConstructor::new(
            SmallestDomainSelector,
            RouletteSelector::new(rng64(1), crate::select::default_heuristic),
            ForwardCheckingPropagator::new(&problem),
        );

        let assignment = constructor.construct(&problem, &pheromones, &params()).unwrap();
        assert!(!assignment.is_complete(problem.variables().len()));
        assert_eq!(assignment.size(), 1);
    }

    #[test]
    fn singleton_closure_forces_the_chain_without_extra_draws() {
        let a = Variable::new("A", vec![1, 2]).unwrap();
        let b = Variable::new("B", vec![1, 2]).unwrap();
        let c = Variable::new("C", vec![1, 2]).unwrap();
        let problem = Problem::new(
            vec![a, b, c],
            vec![
                Box::new(NotEqual::new(VarId(0), VarId(1))),
                Box::new(NotEqual::new(VarId(1), VarId(2))),
            ],
        )
        .unwrap();

        let pheromones = PheromoneMatrix::initialize(&problem, 1.0).unwrap();
        let mut constructor = AssignmentConstructor::new(
            SmallestDomainSelector,
            RouletteSelector::new(rng64(3), crate::select::default_heuristic),
            ForwardCheckingPropagator::new(&problem),
        );

        let assignment = constructor.construct(&problem, &pheromones, &params()).unwrap();
        assert!(assignment.is_complete(problem.variables().len()));
        assert!(problem.is_solution(&assignment));
    }

    #[test]
    fn weight_degeneracy_propagates_as_an_error_instead_of_a_partial_assignment() {
        let a = Variable::new("A", vec![1, 2, 3]).unwrap();
        let b = Variable::new("B", vec![1, 2, 3]).unwrap();
        let problem = Problem::new(vec![a, b], Vec::new()).unwrap();

        let mut pheromones = PheromoneMatrix::initialize(&problem, 1.0).unwrap();
        pheromones.evaporate(1.0).unwrap();

        let mut constructor = AssignmentConstructor::new(
            SmallestDomainSelector,
            RouletteSelector::new(rng64(1), crate::select::default_heuristic),
            ForwardCheckingPropagator::new(&problem),
        );

        let err = constructor
            .construct(&problem, &pheromones, &params())
            .unwrap_err();
        assert_eq!(err, SelectorError::AllWeightsZero);
    }
}

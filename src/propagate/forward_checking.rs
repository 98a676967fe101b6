use super::CspPropagator;
use crate::csp::{Assignment, CspValue, Problem, VarId};

/// Forward-checking propagator: after each assignment, removes from every unassigned
/// involved variable's domain the values that would violate a constraint they share with
/// the assignment built so far.
///
/// Domain reduction is implemented by test-and-revert against a *cloned* assignment, never
/// the live one passed in by the caller — the live assignment is never mutated here.
pub struct ForwardCheckingPropagator<'a, V: CspValue> {
    problem: &'a Problem<V>,
    domains: Vec<Vec<V>>,
    failed: bool,
}

impl<'a, V: CspValue> ForwardCheckingPropagator<'a, V> {
    pub fn new(problem: &'a Problem<V>) -> Self {
        let domains = problem
            .variables()
            .iter()
            .map(|var| var.domain().to_vec())
            .collect();
        Self {
            problem,
            domains,
            failed: false,
        }
    }
}

impl<'a, V: CspValue> CspPropagator<V> for ForwardCheckingPropagator<'a, V> {
    fn reset(&mut self) {
        self.domains = self
            .problem
            .variables()
            .iter()
            .map(|var| var.domain().to_vec())
            .collect();
        self.failed = false;
    }

    fn propagate(&mut self, assignment: &Assignment<V>) -> bool {
        if self.failed {
            return false;
        }

        for constraint in self.problem.constraints() {
            for &var in constraint.involved_variables() {
                if assignment.is_assigned(var) {
                    continue;
                }

                let mut probe = assignment.clone();
                let mut retained = Vec::with_capacity(self.domains[var.0].len());
                for candidate in &self.domains[var.0] {
                    probe.assign(var, candidate.clone());
                    if constraint.is_satisfied(&probe) {
                        retained.push(candidate.clone());
                    }
                }
                probe.unassign(var);

                if retained.is_empty() {
                    self.failed = true;
                    return false;
                }
                self.domains[var.0] = retained;
            }
        }

        true
    }

    fn current_domain(&self, var: VarId) -> &[V] {
        &self.domains[var.0]
    }

    fn has_failed(&self) -> bool {
        self.failed
    }

    fn singleton_variables(&self) -> Vec<VarId> {
        self.domains
            .iter()
            .enumerate()
            .filter(|(_, domain)| domain.len() == 1)
            .map(|(i, _)| VarId(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::{AllDifferent, NotEqual, Variable};

    fn not_equal_problem() -> Problem<usize> {
        let x = Variable::new("X", vec![1, 2]).unwrap();
        let y = Variable::new("Y", vec![1, 2]).unwrap();
        Problem::new(
            vec![x, y],
            vec![Box::new(NotEqual::new(VarId(0), VarId(1)))],
        )
        .unwrap()
    }

    fn all_different_problem() -> Problem<usize> {
        let a = Variable::new("A", vec![1, 2, 3]).unwrap();
        let b = Variable::new("B", vec![1, 2, 3]).unwrap();
        let c = Variable::new("C", vec![1, 2, 3]).unwrap();
        Problem::new(
            vec![a, b, c],
            vec![Box::new(AllDifferent::new(vec![
                VarId(0),
                VarId(1),
                VarId(2),
            ]))],
        )
        .unwrap()
    }

    #[test]
    fn reset_restores_original_domains() {
        let problem = not_equal_problem();
        let mut propagator = ForwardCheckingPropagator::new(&problem);
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        propagator.propagate(&assignment);
        assert_eq!(propagator.current_domain(VarId(1)), &[2]);

        propagator.reset();
        assert_eq!(propagator.current_domain(VarId(1)), &[1, 2]);
        assert!(!propagator.has_failed());
    }

    #[test]
    fn forward_checking_reduces_domain_of_not_equal_neighbor() {
        let problem = not_equal_problem();
        let mut propagator = ForwardCheckingPropagator::new(&problem);
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        assert!(propagator.propagate(&assignment));
        assert_eq!(propagator.current_domain(VarId(1)), &[2]);
    }

    #[test]
    fn wipeout_is_detected_and_latched() {
        let x = Variable::new("X", vec![1]).unwrap();
        let y = Variable::new("Y", vec![1]).unwrap();
        let problem = Problem::new(
            vec![x, y],
            vec![Box::new(NotEqual::new(VarId(0), VarId(1)))],
        )
        .unwrap();
        let mut propagator = ForwardCheckingPropagator::new(&problem);
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        assert!(!propagator.propagate(&assignment));
        assert!(propagator.has_failed());

        assert!(!propagator.propagate(&assignment));
    }

    #[test]
    fn singleton_closure_scenario() {
        let problem = all_different_problem();
        let mut propagator = ForwardCheckingPropagator::new(&problem);
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        assert!(propagator.propagate(&assignment));
        assert_eq!(propagator.current_domain(VarId(1)), &[2, 3]);
        assert_eq!(propagator.current_domain(VarId(2)), &[2, 3]);
        assert!(propagator.singleton_variables().is_empty());

        assignment.assign(VarId(1), 2);
        assert!(propagator.propagate(&assignment));
        assert_eq!(propagator.current_domain(VarId(2)), &[3]);
        assert_eq!(propagator.singleton_variables(), vec![VarId(2)]);
    }
}

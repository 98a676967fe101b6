use std::collections::HashSet;

use super::assignment::Assignment;
use super::constraint::Constraint;
use super::variable::{CspValue, VarId, Variable};
use crate::error::CspError;

/// An aggregate of variables and constraints over them.
pub struct Problem<V: CspValue> {
    variables: Vec<Variable<V>>,
    constraints: Vec<Box<dyn Constraint<V>>>,
}

impl<V: CspValue> Problem<V> {
    pub fn new(
        variables: Vec<Variable<V>>,
        constraints: Vec<Box<dyn Constraint<V>>>,
    ) -> Result<Self, CspError> {
        if variables.is_empty() {
            return Err(CspError::NoVariables);
        }

        let mut seen_names = HashSet::with_capacity(variables.len());
        for variable in &variables {
            if !seen_names.insert(variable.name().to_string()) {
                return Err(CspError::DuplicateVariableName(variable.name().to_string()));
            }
        }

        Ok(Self {
            variables,
            constraints,
        })
    }

    pub fn variables(&self) -> &[Variable<V>] {
        &self.variables
    }

    pub fn variable(&self, id: VarId) -> &Variable<V> {
        &self.variables[id.0]
    }

    pub fn variable_ids(&self) -> impl Iterator<Item = VarId> + '_ {
        (0..self.variables.len()).map(VarId)
    }

    pub fn constraints(&self) -> &[Box<dyn Constraint<V>>] {
        &self.constraints
    }

    /// All constraints whose fully-assigned involved variables are satisfied.
    /// Constraints with an unassigned involved variable are optimistically satisfied
    /// already (see `Constraint::is_satisfied`), so this is a plain conjunction.
    pub fn is_consistent(&self, assignment: &Assignment<V>) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied(assignment))
    }

    pub fn is_solution(&self, assignment: &Assignment<V>) -> bool {
        assignment.is_complete(self.variables.len()) && self.is_consistent(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::constraint::NotEqual;

    fn two_variable_problem() -> Problem<usize> {
        let x = Variable::new("X", vec![1, 2]).unwrap();
        let y = Variable::new("Y", vec![1, 2]).unwrap();
        Problem::new(
            vec![x, y],
            vec![Box::new(NotEqual::new(VarId(0), VarId(1)))],
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_variable_list() {
        let result: Result<Problem<usize>, _> = Problem::new(Vec::new(), Vec::new());
        assert_eq!(result.unwrap_err(), CspError::NoVariables);
    }

    #[test]
    fn rejects_duplicate_variable_names() {
        let x1 = Variable::new("X", vec![1]).unwrap();
        let x2 = Variable::new("X", vec![2]).unwrap();
        let result: Result<Problem<usize>, _> = Problem::new(vec![x1, x2], Vec::new());
        assert_eq!(
            result.unwrap_err(),
            CspError::DuplicateVariableName("X".to_string())
        );
    }

    #[test]
    fn is_consistent_checks_all_constraints() {
        let problem = two_variable_problem();
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        assignment.assign(VarId(1), 1);
        assert!(!problem.is_consistent(&assignment));

        assignment.assign(VarId(1), 2);
        assert!(problem.is_consistent(&assignment));
    }

    #[test]
    fn is_solution_requires_completeness_and_consistency() {
        let problem = two_variable_problem();
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1);
        assert!(!problem.is_solution(&assignment));

        assignment.assign(VarId(1), 2);
        assert!(problem.is_solution(&assignment));
    }
}

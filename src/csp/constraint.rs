use super::assignment::Assignment;
use super::variable::{CspValue, VarId};

/// A predicate over a fixed set of variables.
///
/// `is_satisfied` is optimistic: a constraint with any unassigned involved variable is
/// considered satisfied, since it has not yet been definitively violated.
pub trait Constraint<V: CspValue> {
    fn involved_variables(&self) -> &[VarId];

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool;
}

/// Two variables must not take on the same value.
pub struct NotEqual {
    vars: [VarId; 2],
}

impl NotEqual {
    pub fn new(a: VarId, b: VarId) -> Self {
        Self { vars: [a, b] }
    }
}

impl<V: CspValue> Constraint<V> for NotEqual {
    fn involved_variables(&self) -> &[VarId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        match (assignment.get(self.vars[0]), assignment.get(self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}

/// All involved variables must take on pairwise-distinct values.
pub struct AllDifferent {
    vars: Vec<VarId>,
}

impl AllDifferent {
    pub fn new(vars: Vec<VarId>) -> Self {
        Self { vars }
    }
}

impl<V: CspValue> Constraint<V> for AllDifferent {
    fn involved_variables(&self) -> &[VarId] {
        &self.vars
    }

    fn is_satisfied(&self, assignment: &Assignment<V>) -> bool {
        let mut seen: Vec<&V> = Vec::with_capacity(self.vars.len());
        for &var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if seen.contains(&value) {
                    return false;
                }
                seen.push(value);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_equal_optimistic_when_partial() {
        let constraint = NotEqual::new(VarId(0), VarId(1));
        let mut assignment = Assignment::new();
        assert!(constraint.is_satisfied(&assignment));
        assignment.assign(VarId(0), 1usize);
        assert!(constraint.is_satisfied(&assignment));
    }

    #[test]
    fn not_equal_rejects_equal_values() {
        let constraint = NotEqual::new(VarId(0), VarId(1));
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1usize);
        assignment.assign(VarId(1), 1usize);
        assert!(!constraint.is_satisfied(&assignment));
        assignment.assign(VarId(1), 2usize);
        assert!(constraint.is_satisfied(&assignment));
    }

    #[test]
    fn all_different_rejects_first_duplicate() {
        let constraint = AllDifferent::new(vec![VarId(0), VarId(1), VarId(2)]);
        let mut assignment = Assignment::new();
        assignment.assign(VarId(0), 1usize);
        assignment.assign(VarId(1), 2usize);
        assert!(constraint.is_satisfied(&assignment));
        assignment.assign(VarId(2), 1usize);
        assert!(!constraint.is_satisfied(&assignment));
    }
}

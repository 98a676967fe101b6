use std::collections::HashMap;

use super::variable::{CspValue, VarId};

/// A mutable variable-to-value mapping built by one ant during its construction walk.
///
/// Invariant (enforced by callers, not by this type): every stored value belongs to the
/// domain of the variable it is assigned to.
#[derive(Debug, Clone, Default)]
pub struct Assignment<V: CspValue> {
    values: HashMap<VarId, V>,
}

impl<V: CspValue> Assignment<V> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn assign(&mut self, var: VarId, value: V) {
        self.values.insert(var, value);
    }

    pub fn unassign(&mut self, var: VarId) {
        self.values.remove(&var);
    }

    pub fn get(&self, var: VarId) -> Option<&V> {
        self.values.get(&var)
    }

    pub fn is_assigned(&self, var: VarId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_complete(&self, variable_count: usize) -> bool {
        self.size() == variable_count
    }

    /// Produces an independent copy, suitable for storing into cycle history.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &V)> + '_ {
        self.values.iter().map(|(&var, value)| (var, value))
    }
}

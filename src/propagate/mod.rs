mod forward_checking;

pub use forward_checking::ForwardCheckingPropagator;

use crate::csp::{Assignment, CspValue, VarId};

/// Required collaborator the assignment constructor propagates through after every decision.
///
/// Once `propagate` returns `false` the propagator is considered failed and stays failed
/// until the next `reset`.
pub trait CspPropagator<V: CspValue> {
    /// Restores current domains to the problem's original domains and clears the failed flag.
    fn reset(&mut self);

    /// Reduces domains of unassigned involved variables by forward checking against
    /// `assignment`. Returns `false` and latches the failed flag on any domain wipeout.
    fn propagate(&mut self, assignment: &Assignment<V>) -> bool;

    /// The present reduced domain for `var`.
    fn current_domain(&self, var: VarId) -> &[V];

    fn has_failed(&self) -> bool;

    /// Variables (assigned or not) whose current domain has size one.
    fn singleton_variables(&self) -> Vec<VarId>;
}

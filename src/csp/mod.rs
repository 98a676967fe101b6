mod assignment;
mod constraint;
mod problem;
mod variable;

pub use assignment::Assignment;
pub use constraint::{AllDifferent, Constraint, NotEqual};
pub use problem::Problem;
pub use variable::{CspValue, VarId, Variable};

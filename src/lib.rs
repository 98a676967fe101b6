pub mod colony;
pub mod construct;
pub mod csp;
pub mod error;
pub mod pheromone;
pub mod propagate;
pub mod rng;
pub mod select;

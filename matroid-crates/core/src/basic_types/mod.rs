mod approximation_solution;
mod element_id;

pub use approximation_solution::*;
pub use element_id::*;

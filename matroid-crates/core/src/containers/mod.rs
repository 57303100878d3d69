//! Contains containers which are used by the oracles and the solvers.
mod keyed_vec;

pub use keyed_vec::*;

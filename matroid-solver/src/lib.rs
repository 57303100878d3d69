//! # Matroid solver
//!
//! Searches for a large set which is independent in several matroids at once. The heavy lifting is
//! done by [`matroid_core`], which this crate re-exports; the `matroid-solver` binary generates
//! random matching and Hamiltonian-path instances, runs every applicable solver on them and reports
//! the validated solutions as JSON.
//!
//! ```rust
//! # use matroid_solver::core::MatroidProblem;
//! # use matroid_solver::core::solvers::BaselineSolver;
//! let mut problem = MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![1, 1]]).unwrap();
//! let solution = BaselineSolver.solve(&mut problem).unwrap();
//!
//! assert_eq!(solution.indices(), vec![0, 1]);
//! ```
pub use matroid_core as core;
pub use matroid_core::*;

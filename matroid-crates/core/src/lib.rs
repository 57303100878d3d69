//! # Matroid intersection
//!
//! This crate searches for a maximum-cardinality set which is independent in each of `k` matroids
//! over a shared ground set. For `k >= 3` this is NP-hard; the crate offers a greedy baseline, an
//! exact matcher for bipartite matching and an exchange-based local search which certifies an
//! approximation ratio for the solutions it finds.
//!
//! Matroids are only accessed through incremental [`IndependenceOracle`]s, which a
//! [`MatroidProblem`] keeps in agreement with each other.
//!
//! ```rust
//! # use matroid_core::MatroidProblem;
//! # use matroid_core::solvers::local_search::LocalSearch;
//! # use matroid_core::termination::Indefinite;
//! // Bipartite matching on two vertices per side.
//! let mut problem =
//!     MatroidProblem::matching(2, 2, vec![vec![0, 0], vec![0, 1], vec![1, 0]]).unwrap();
//!
//! let outcome = LocalSearch::new(Indefinite).solve(&mut problem).unwrap();
//! assert_eq!(outcome.best().unwrap().indices(), vec![1, 2]);
//! ```
#[cfg(doc)]
use crate::oracles::IndependenceOracle;

pub mod asserts;
pub mod basic_types;
pub mod containers;
pub mod oracles;
pub mod problem;
pub mod solvers;
pub mod statistics;
pub mod termination;

pub use convert_case;

pub use crate::basic_types::ApproximationRatio;
pub use crate::basic_types::ApproximationSolution;
pub use crate::basic_types::CertificateKind;
pub use crate::basic_types::ElementId;
pub use crate::problem::MatroidProblem;
pub use crate::problem::ProblemError;
pub use crate::solvers::SolverError;

//! Incremental independence oracles.
//!
//! An [`IndependenceOracle`] keeps track of a subset of the ground set which is independent in one
//! matroid. It only answers the question "does the set stay independent when this element is
//! added?", and commits the element when the answer is yes. Oracles never enumerate the matroid.
//!
//! Every oracle relies on the following contract:
//! - it is only queried while its current set is independent;
//! - [`IndependenceOracle::remove`] is only called for elements which it accepted and which have
//!   not been removed since.
//!
//! Violations of the contract are reported as [`OracleError`]s; the ordinary "dependent" answer
//! is `Ok(false)`.

mod endpoint_oracle;
mod functional_forest_oracle;
mod oracle_error;
mod partition_oracle;
mod traversal_forest_oracle;

use std::fmt::Debug;

pub use endpoint_oracle::*;
pub use functional_forest_oracle::*;
pub use oracle_error::*;
pub use partition_oracle::*;
pub use traversal_forest_oracle::*;

use crate::basic_types::ElementId;
use crate::containers::StorageKey;

/// The incremental independence test of a single matroid.
pub trait IndependenceOracle: Debug {
    /// A short human-readable name, used in diagnostics.
    fn name(&self) -> &str;

    /// The number of elements in the ground set which this oracle was built for.
    fn ground_set_size(&self) -> usize;

    /// Adds `element` if the current set stays independent.
    ///
    /// Returns `Ok(true)` if the element was added; in that case the internal state has changed.
    /// Returns `Ok(false)` if the element would make the set dependent; the internal state is
    /// untouched.
    fn try_add(&mut self, element: ElementId) -> Result<bool, OracleError>;

    /// Removes `element`, which must have been accepted by [`IndependenceOracle::try_add`] before.
    fn remove(&mut self, element: ElementId) -> Result<(), OracleError>;
}

/// Selects the oracle which rules out cycles in the Hamiltonian-path problem.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ForestCheck {
    /// Follow the forward links from the head of the edge, see [`FunctionalForestOracle`].
    ///
    /// Only valid when the in- and out-degree of every vertex is bounded by one.
    #[default]
    FunctionalLinks,
    /// Search the undirected forest for a connection, see [`TraversalForestOracle`].
    Traversal,
}

fn check_element(element: ElementId, ground_set_size: usize) -> Result<(), OracleError> {
    if element.index() >= ground_set_size {
        return Err(OracleError::ElementOutOfRange {
            element,
            ground_set_size,
        });
    }
    Ok(())
}

fn check_edges(edges: &[(usize, usize)], vertex_count: usize) -> Result<(), OracleError> {
    for (element, &(tail, head)) in ElementId::range(edges.len()).zip(edges) {
        if let Some(vertex) = [tail, head].into_iter().find(|&vertex| vertex >= vertex_count) {
            return Err(OracleError::VertexOutOfBounds {
                element,
                vertex,
                vertex_count,
            });
        }
    }
    Ok(())
}

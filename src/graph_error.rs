//! GraphError: unified error type for kahn-multigraph public APIs
//!
//! Every fallible operation on a [`DirectedMultigraph`](crate::topology::multigraph::DirectedMultigraph)
//! returns this error type. Errors are terminal for the call that produced them; nothing is
//! recovered silently and no public path panics on bad input.

use itertools::Itertools;
use thiserror::Error;

use crate::topology::vertex::VertexId;

/// Unified error type for multigraph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex argument fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: i64, vertex_count: usize },
    /// The sort could not find a vertex with zero in-degree before all vertices were scheduled.
    ///
    /// `partial` holds the schedule accumulated up to the point of detection.
    #[error("cycle detected after scheduling {} vertices: [{}]", .partial.len(), .partial.iter().join(", "))]
    CycleDetected { partial: Vec<VertexId> },
    /// `topological_sort` was called on a graph whose sort epoch has already been used.
    #[error("graph already consumed by a previous topological sort")]
    GraphAlreadyConsumed,
    /// Adding another `src → tar` edge would overflow the edge or incoming counter.
    #[error("edge count overflow on {src} -> {tar}")]
    EdgeCountOverflow { src: VertexId, tar: VertexId },
    /// Recorded incoming-edge counter disagrees with the sum over the edge store.
    #[error("incoming counter of vertex {vertex} is {recorded}, edge store implies {expected}")]
    IncomingMismatch {
        vertex: VertexId,
        recorded: u64,
        expected: u64,
    },
}

impl GraphError {
    /// Build an [`GraphError::OutOfRange`] for an unsigned vertex argument.
    pub(crate) fn out_of_range(vertex: VertexId, vertex_count: usize) -> Self {
        GraphError::OutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }

    /// Partial schedule carried by a [`GraphError::CycleDetected`], if this is one.
    pub fn partial_order(&self) -> Option<&[VertexId]> {
        match self {
            GraphError::CycleDetected { partial } => Some(partial),
            _ => None,
        }
    }
}

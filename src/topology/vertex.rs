//! Vertex identifiers and range checks.
//!
//! Vertices of a [`DirectedMultigraph`](crate::topology::multigraph::DirectedMultigraph)
//! are the dense integers `0..vertex_count`. Unsigned IDs make negative vertices
//! unrepresentable inside the crate; callers holding signed IDs go through
//! [`checked_vertex`], which reports negatives as [`GraphError::OutOfRange`].

use crate::graph_error::GraphError;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Check that `vertex` lies in `[0, vertex_count)`.
#[inline]
pub fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<VertexId, GraphError> {
    if vertex < vertex_count {
        Ok(vertex)
    } else {
        Err(GraphError::out_of_range(vertex, vertex_count))
    }
}

/// Convert a signed vertex ID, rejecting negatives and IDs `>= vertex_count`.
///
/// ```rust
/// # use kahn_multigraph::topology::vertex::checked_vertex;
/// assert_eq!(checked_vertex(2, 3), Ok(2));
/// assert!(checked_vertex(-1, 3).is_err());
/// assert!(checked_vertex(3, 3).is_err());
/// ```
pub fn checked_vertex(raw: i64, vertex_count: usize) -> Result<VertexId, GraphError> {
    let vertex = VertexId::try_from(raw).map_err(|_| GraphError::OutOfRange {
        vertex: raw,
        vertex_count,
    })?;
    check_vertex(vertex, vertex_count)
}

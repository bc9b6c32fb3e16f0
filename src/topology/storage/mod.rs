//! Edge-count storage backends.
//!
//! [`EdgeStorage`] abstracts the `V × V` table of edge multiplicities. Two
//! backends are provided:
//! - [`DenseMatrix`]: a full `V × V` table, the default.
//! - [`AdjacencyList`]: per-vertex sorted maps holding only non-zero counts,
//!   for large sparse graphs.
//!
//! Both report rows in increasing target order, so every query built on top
//! of them is deterministic regardless of backend.

pub mod adjacency;
pub mod dense;

pub use adjacency::AdjacencyList;
pub use dense::DenseMatrix;

use crate::topology::vertex::VertexId;

/// Storage of directed edge multiplicities over the vertex set `0..vertex_count`.
///
/// Vertex arguments are assumed to be in range; range checking belongs to the
/// owning graph.
pub trait EdgeStorage: Clone + std::fmt::Debug {
    /// Iterator over `(target, count)` for all non-zero counts of one row.
    type RowIter<'a>: Iterator<Item = (VertexId, u32)>
    where
        Self: 'a;

    /// Empty storage over `vertex_count` vertices.
    fn with_vertices(vertex_count: usize) -> Self;

    /// Number of vertices this storage was built for.
    fn vertex_count(&self) -> usize;

    /// Number of `src → tar` edges.
    fn count(&self, src: VertexId, tar: VertexId) -> u32;

    /// Add one `src → tar` edge. The caller has already checked for overflow.
    fn increment(&mut self, src: VertexId, tar: VertexId);

    /// Non-zero counts leaving `src`, in strictly increasing target order.
    fn row(&self, src: VertexId) -> Self::RowIter<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(DenseMatrix: Send, Sync, Clone);
    assert_impl_all!(AdjacencyList: Send, Sync, Clone);

    fn exercise<S: EdgeStorage>() {
        let mut s = S::with_vertices(4);
        assert_eq!(s.vertex_count(), 4);
        assert_eq!(s.row(0).count(), 0);

        s.increment(0, 3);
        s.increment(0, 1);
        s.increment(0, 3);
        s.increment(2, 2);

        assert_eq!(s.count(0, 3), 2);
        assert_eq!(s.count(0, 1), 1);
        assert_eq!(s.count(1, 0), 0);
        assert_eq!(s.count(2, 2), 1);
        assert_eq!(s.row(0).collect::<Vec<_>>(), vec![(1, 1), (3, 2)]);
        assert_eq!(s.row(2).collect::<Vec<_>>(), vec![(2, 1)]);
        assert!(s.row(3).next().is_none());
    }

    #[test]
    fn dense_contract() {
        exercise::<DenseMatrix>();
    }

    #[test]
    fn adjacency_contract() {
        exercise::<AdjacencyList>();
    }

    #[test]
    fn zero_vertices() {
        assert_eq!(DenseMatrix::with_vertices(0).vertex_count(), 0);
        assert_eq!(AdjacencyList::with_vertices(0).vertex_count(), 0);
    }
}

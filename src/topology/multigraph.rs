//! Directed multigraph over a fixed dense vertex set.
//!
//! [`DirectedMultigraph`] owns an edge-count store and a per-vertex
//! incoming-edge counter kept in lockstep with it. The vertex set `0..V` is
//! fixed at construction; edges can only be added.
//!
//! # Sort epochs
//! A graph starts in [`Epoch::Buildable`]. [`DirectedMultigraph::topological_sort`]
//! is single-use: it moves the graph to [`Epoch::Consumed`] and any further call
//! fails with [`GraphError::GraphAlreadyConsumed`]. The incoming counters
//! themselves are never modified by sorting, so
//! [`DirectedMultigraph::topological_order`] can be called any number of times.
//!
//! # Example
//! ```rust
//! use kahn_multigraph::prelude::*;
//!
//! let mut g = DirectedMultigraph::new(3);
//! g.add_edge(2, 0)?;
//! g.add_edge(0, 1)?;
//! assert_eq!(g.neighbors(0)?, vec![1]);
//! assert_eq!(g.topological_sort()?, vec![2, 0, 1]);
//! assert_eq!(g.topological_sort(), Err(GraphError::GraphAlreadyConsumed));
//! # Ok::<(), GraphError>(())
//! ```

use crate::algs::kahn::kahn_order;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::policy::{ArcPolicy, GraphConfig};
use crate::topology::storage::{DenseMatrix, EdgeStorage};
use crate::topology::vertex::{VertexId, check_vertex};

/// Lifecycle state of a graph with respect to [`DirectedMultigraph::topological_sort`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Epoch {
    /// No single-use sort has run yet.
    #[default]
    Buildable,
    /// A single-use sort has run; another one is rejected.
    Consumed,
}

/// Finite directed multigraph on vertices `0..vertex_count`.
///
/// `S` selects the edge-count backend; the dense `V × V` table is the default.
#[derive(Clone, Debug)]
pub struct DirectedMultigraph<S: EdgeStorage = DenseMatrix> {
    storage: S,
    incoming: Vec<u32>,
    policy: ArcPolicy,
    epoch: Epoch,
}

impl DirectedMultigraph<DenseMatrix> {
    /// Dense graph with `vertex_count` vertices, no edges and the default config.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_config(vertex_count, GraphConfig::default())
    }
}

impl<S: EdgeStorage> DirectedMultigraph<S> {
    /// Graph with `vertex_count` vertices and no edges, using `config`.
    pub fn with_config(vertex_count: usize, config: GraphConfig) -> Self {
        Self {
            storage: S::with_vertices(vertex_count),
            incoming: vec![0; vertex_count],
            policy: config.arc_policy,
            epoch: Epoch::Buildable,
        }
    }

    /// Build a graph and insert `edges` in order, failing on the first bad edge.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut g = Self::with_config(vertex_count, GraphConfig::default());
        g.extend_edges(edges)?;
        Ok(g)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.incoming.len()
    }

    #[inline]
    pub fn policy(&self) -> ArcPolicy {
        self.policy
    }

    #[inline]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    #[inline]
    pub fn is_consumed(&self) -> bool {
        self.epoch == Epoch::Consumed
    }

    /// Read-only access to the edge-count backend.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one directed edge `src → tar`.
    ///
    /// Parallel edges accumulate. Both endpoints and the counters are checked
    /// before anything is written, so a failed call changes nothing.
    ///
    /// # Errors
    /// * [`GraphError::OutOfRange`] if `src` or `tar` is not in `[0, vertex_count)`.
    /// * [`GraphError::EdgeCountOverflow`] if a counter would exceed `u32::MAX`.
    pub fn add_edge(&mut self, src: VertexId, tar: VertexId) -> Result<(), GraphError> {
        let n = self.vertex_count();
        check_vertex(src, n)?;
        check_vertex(tar, n)?;

        // incoming[tar] >= count(src, tar), so it saturates first.
        if self.incoming[tar] == u32::MAX {
            return Err(GraphError::EdgeCountOverflow { src, tar });
        }

        self.storage.increment(src, tar);
        self.incoming[tar] += 1;
        crate::debug_invariants!(
            self.validate_column(tar),
            "DirectedMultigraph invalid after add_edge"
        );
        Ok(())
    }

    /// Insert every edge of `edges` in order, stopping at the first error.
    ///
    /// Edges inserted before the failing one stay in the graph.
    pub fn extend_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        for (src, tar) in edges {
            self.add_edge(src, tar)?;
        }
        Ok(())
    }

    /// Number of `src → tar` edges.
    pub fn edge_count(&self, src: VertexId, tar: VertexId) -> Result<u32, GraphError> {
        let n = self.vertex_count();
        check_vertex(src, n)?;
        check_vertex(tar, n)?;
        Ok(self.storage.count(src, tar))
    }

    /// Number of edges terminating at `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> Result<u32, GraphError> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self.incoming[vertex])
    }

    /// Total number of edges, parallel edges included.
    pub fn total_edges(&self) -> u64 {
        self.incoming.iter().map(|&d| u64::from(d)).sum()
    }

    /// Targets of the arcs leaving `vertex`, in strictly increasing order.
    ///
    /// Only counts admitted by the graph's [`ArcPolicy`] are reported. Under the
    /// default [`ArcPolicy::PresenceFlag`] a target reached by two or more
    /// parallel edges is *not* a neighbor.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>, GraphError> {
        check_vertex(vertex, self.vertex_count())?;
        Ok(self
            .storage
            .row(vertex)
            .filter_map(|(v, c)| self.policy.admits(c).then_some(v))
            .collect())
    }

    /// Single-use topological sort.
    ///
    /// Returns every vertex exactly once such that each admitted arc `u → v`
    /// has `u` before `v`; ties go to the lowest vertex ID. The graph moves to
    /// [`Epoch::Consumed`] whether or not the sort succeeds.
    ///
    /// # Errors
    /// * [`GraphError::GraphAlreadyConsumed`] if a previous call already ran.
    /// * [`GraphError::CycleDetected`] with the partial schedule when no vertex
    ///   with zero in-degree remains.
    pub fn topological_sort(&mut self) -> Result<Vec<VertexId>, GraphError> {
        if self.is_consumed() {
            log::warn!("topological_sort on a consumed graph");
            return Err(GraphError::GraphAlreadyConsumed);
        }
        self.epoch = Epoch::Consumed;
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        self.debug_assert_invariants();
        log::debug!(
            "topological_sort: {} vertices, {} edges, {:?}",
            self.vertex_count(),
            self.total_edges(),
            self.policy
        );
        self.topological_order()
    }

    /// Repeatable topological sort; same result as [`Self::topological_sort`]
    /// without touching the epoch.
    pub fn topological_order(&self) -> Result<Vec<VertexId>, GraphError> {
        kahn_order(&self.storage, &self.incoming, self.policy)
    }

    #[cfg_attr(
        not(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants")),
        allow(dead_code)
    )]
    fn validate_column(&self, vertex: VertexId) -> Result<(), GraphError> {
        let expected: u64 = (0..self.vertex_count())
            .map(|u| u64::from(self.storage.count(u, vertex)))
            .sum();
        let recorded = u64::from(self.incoming[vertex]);
        if recorded != expected {
            return Err(GraphError::IncomingMismatch {
                vertex,
                recorded,
                expected,
            });
        }
        Ok(())
    }
}

impl<S: EdgeStorage> DebugInvariants for DirectedMultigraph<S> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "DirectedMultigraph invalid");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let mut expected = vec![0u64; self.vertex_count()];
        for u in 0..self.vertex_count() {
            for (v, c) in self.storage.row(u) {
                expected[v] += u64::from(c);
            }
        }
        for (vertex, (&recorded, &expected)) in self.incoming.iter().zip(&expected).enumerate() {
            if u64::from(recorded) != expected {
                return Err(GraphError::IncomingMismatch {
                    vertex,
                    recorded: u64::from(recorded),
                    expected,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::storage::AdjacencyList;

    #[test]
    fn new_graph_is_empty() {
        let g = DirectedMultigraph::new(4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.total_edges(), 0);
        assert_eq!(g.epoch(), Epoch::Buildable);
        for v in 0..4 {
            assert_eq!(g.in_degree(v), Ok(0));
            assert_eq!(g.neighbors(v), Ok(vec![]));
        }
        g.validate_invariants().unwrap();
    }

    #[test]
    fn add_edge_rejects_before_mutating() {
        let mut g = DirectedMultigraph::new(2);
        g.add_edge(0, 1).unwrap();
        assert!(matches!(g.add_edge(0, 2), Err(GraphError::OutOfRange { vertex: 2, .. })));
        assert!(matches!(g.add_edge(5, 1), Err(GraphError::OutOfRange { vertex: 5, .. })));
        assert_eq!(g.in_degree(1), Ok(1));
        assert_eq!(g.total_edges(), 1);
    }

    #[test]
    fn from_edges_stops_at_first_error() {
        let err = DirectedMultigraph::<DenseMatrix>::from_edges(2, [(0, 1), (1, 9)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::OutOfRange {
                vertex: 9,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn consumed_after_cycle() {
        let mut g = DirectedMultigraph::<DenseMatrix>::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        assert!(matches!(g.topological_sort(), Err(GraphError::CycleDetected { .. })));
        assert!(g.is_consumed());
        assert_eq!(g.topological_sort(), Err(GraphError::GraphAlreadyConsumed));
    }

    #[test]
    fn sparse_backend_with_multiplicity() {
        let mut g = DirectedMultigraph::<AdjacencyList>::with_config(3, GraphConfig::multiplicity());
        g.extend_edges([(0, 2), (0, 2), (1, 0)]).unwrap();
        assert_eq!(g.policy(), ArcPolicy::Multiplicity);
        assert_eq!(g.neighbors(0), Ok(vec![2]));
        assert_eq!(g.topological_sort(), Ok(vec![1, 0, 2]));
    }

    #[test]
    fn overflow_is_rejected_before_mutation() {
        let mut g = DirectedMultigraph::new(2);
        g.incoming[1] = u32::MAX;
        assert_eq!(
            g.add_edge(0, 1),
            Err(GraphError::EdgeCountOverflow { src: 0, tar: 1 })
        );
        assert_eq!(g.edge_count(0, 1), Ok(0));
        assert_eq!(g.in_degree(1), Ok(u32::MAX));
    }

    #[test]
    fn validate_detects_tampered_counter() {
        let mut g = DirectedMultigraph::new(2);
        g.add_edge(0, 1).unwrap();
        g.incoming[1] = 3;
        assert_eq!(
            g.validate_invariants(),
            Err(GraphError::IncomingMismatch {
                vertex: 1,
                recorded: 3,
                expected: 1
            })
        );
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! # kahn-multigraph
//!
//! kahn-multigraph models a finite directed multigraph over a fixed, dense vertex set
//! `0..V` and computes a topological ordering of its vertices with an incidence-counting
//! (Kahn-style) algorithm.
//!
//! ## Features
//! - Edge insertion with parallel-edge counting and incoming-edge bookkeeping
//! - Ordered neighbor queries under a configurable [`ArcPolicy`](topology::ArcPolicy)
//! - Deterministic topological sort (lowest vertex ID wins ties) with cycle reporting
//! - Dense (`V × V`) and sparse (adjacency list) storage behind one trait
//!
//! ## Determinism
//!
//! Every query enumerates vertices in increasing ID order, so the same edge set
//! always yields the same neighbors and the same schedule, whatever the backend.
//!
//! ## Single-use sort
//!
//! [`DirectedMultigraph::topological_sort`](topology::DirectedMultigraph::topological_sort)
//! may run once per graph; a second call fails with
//! [`GraphError::GraphAlreadyConsumed`](graph_error::GraphError::GraphAlreadyConsumed).
//! Use [`topological_order`](topology::DirectedMultigraph::topological_order) for a
//! repeatable sort.
//!
//! ## Invariant checks
//!
//! Debug builds verify `incoming[v] == Σ_u count(u, v)` after every insertion.
//! Enable `check-invariants` (or `strict-invariants`) to keep the checks in release builds.

pub mod algs;
pub mod debug_invariants;
pub mod graph_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::kahn::{ZeroScan, kahn_order};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::topology::multigraph::{DirectedMultigraph, Epoch};
    pub use crate::topology::policy::{ArcPolicy, GraphConfig};
    pub use crate::topology::storage::{AdjacencyList, DenseMatrix, EdgeStorage};
    pub use crate::topology::vertex::{VertexId, checked_vertex};
}

//! Top-level module for multigraph topology.
//!
//! This module provides the graph type and its building blocks:
//! - Vertex identifiers and range checks
//! - Arc policy and construction config
//! - Edge-count storage backends (dense and sparse)
//! - The `DirectedMultigraph` itself
//!
//! Most users only need [`DirectedMultigraph`] and, occasionally, [`GraphConfig`].

pub mod multigraph;
pub mod policy;
pub mod storage;
pub mod vertex;

pub use multigraph::{DirectedMultigraph, Epoch};
pub use policy::{ArcPolicy, GraphConfig};
pub use storage::{AdjacencyList, DenseMatrix, EdgeStorage};
pub use vertex::VertexId;

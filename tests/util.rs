#![allow(dead_code)]
use kahn_multigraph::topology::multigraph::DirectedMultigraph;
use kahn_multigraph::topology::policy::GraphConfig;
use kahn_multigraph::topology::storage::{DenseMatrix, EdgeStorage};

/// Build a dense graph from edges (u -> v) with the default config.
pub fn graph_from(n: usize, edges: &[(usize, usize)]) -> DirectedMultigraph<DenseMatrix> {
    DirectedMultigraph::from_edges(n, edges.iter().copied()).unwrap()
}

/// Build a graph on any backend with an explicit config.
pub fn graph_with<S: EdgeStorage>(
    n: usize,
    edges: &[(usize, usize)],
    config: GraphConfig,
) -> DirectedMultigraph<S> {
    let mut g = DirectedMultigraph::<S>::with_config(n, config);
    g.extend_edges(edges.iter().copied()).unwrap();
    g
}

/// Snapshot of all in-degrees, for "nothing changed" assertions.
pub fn in_degrees<S: EdgeStorage>(g: &DirectedMultigraph<S>) -> Vec<u32> {
    (0..g.vertex_count()).map(|v| g.in_degree(v).unwrap()).collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Assert every edge (u, v) has u before v in `order`.
pub fn assert_respects_edges(order: &[usize], edges: &[(usize, usize)]) {
    let mut pos = vec![usize::MAX; order.len()];
    for (i, &v) in order.iter().enumerate() {
        pos[v] = i;
    }
    for &(u, v) in edges {
        assert!(pos[u] < pos[v], "edge {u} -> {v} violated by order {order:?}");
    }
}

use std::collections::BTreeMap;

use super::EdgeStorage;
use crate::topology::vertex::VertexId;

/// Sparse edge counts: one `BTreeMap<target, count>` per source vertex.
///
/// Only non-zero counts are stored. `BTreeMap` keeps rows sorted by target so
/// row enumeration matches [`DenseMatrix`](super::DenseMatrix) exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    rows: Vec<BTreeMap<VertexId, u32>>,
}

#[inline]
fn copied((&v, &c): (&VertexId, &u32)) -> (VertexId, u32) {
    (v, c)
}

impl EdgeStorage for AdjacencyList {
    type RowIter<'a> = std::iter::Map<
        std::collections::btree_map::Iter<'a, VertexId, u32>,
        fn((&VertexId, &u32)) -> (VertexId, u32),
    >
    where
        Self: 'a;

    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            rows: vec![BTreeMap::new(); vertex_count],
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn count(&self, src: VertexId, tar: VertexId) -> u32 {
        self.rows[src].get(&tar).copied().unwrap_or(0)
    }

    fn increment(&mut self, src: VertexId, tar: VertexId) {
        *self.rows[src].entry(tar).or_insert(0) += 1;
    }

    fn row(&self, src: VertexId) -> Self::RowIter<'_> {
        self.rows[src]
            .iter()
            .map(copied as fn((&VertexId, &u32)) -> (VertexId, u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_touched_cells_are_stored() {
        let mut a = AdjacencyList::with_vertices(1000);
        a.increment(999, 0);
        a.increment(999, 0);
        assert_eq!(a.rows[999].len(), 1);
        assert_eq!(a.count(999, 0), 2);
        assert_eq!(a.count(0, 999), 0);
        assert!(a.rows[0].is_empty());
    }
}

use super::EdgeStorage;
use crate::topology::vertex::VertexId;

/// Dense `V × V` table of edge counts; `cells[u][v]` is the number of `u → v` edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseMatrix {
    cells: Vec<Vec<u32>>,
}

type NonZero<'a> = std::iter::FilterMap<
    std::iter::Enumerate<std::slice::Iter<'a, u32>>,
    fn((usize, &u32)) -> Option<(VertexId, u32)>,
>;

#[inline]
fn non_zero((v, &c): (usize, &u32)) -> Option<(VertexId, u32)> {
    (c > 0).then_some((v, c))
}

impl EdgeStorage for DenseMatrix {
    type RowIter<'a>
        = NonZero<'a>
    where
        Self: 'a;

    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            cells: vec![vec![0; vertex_count]; vertex_count],
        }
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn count(&self, src: VertexId, tar: VertexId) -> u32 {
        self.cells[src][tar]
    }

    #[inline]
    fn increment(&mut self, src: VertexId, tar: VertexId) {
        self.cells[src][tar] += 1;
    }

    fn row(&self, src: VertexId) -> Self::RowIter<'_> {
        self.cells[src]
            .iter()
            .enumerate()
            .filter_map(non_zero as fn((usize, &u32)) -> Option<(VertexId, u32)>)
    }
}

//! Predecessor matrix used to rebuild shortest paths.

use crate::error::Result;
use crate::matrix::{square_buffer, DistanceMatrix, NodeId, INFINITY};

/// `get(i, j)` is the node right before `j` on the best known path from `i`,
/// or `None` when no path is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredecessorMatrix {
    n: usize,
    p: Vec<Option<NodeId>>,
}

impl PredecessorMatrix {
    /// Every finite entry `(i, j)` of `graph` (a direct edge or the diagonal)
    /// gets `i` as predecessor of `j`.
    pub fn from_distances(graph: &DistanceMatrix) -> Result<Self> {
        let n = graph.len();
        let mut p = square_buffer(n, None)?;
        for (i, row) in p.chunks_mut(n.max(1)).enumerate() {
            for (pred, &x) in row.iter_mut().zip(graph.row(i)) {
                *pred = (x != INFINITY).then_some(i);
            }
        }
        Ok(PredecessorMatrix { n, p })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: NodeId, j: NodeId) -> Option<NodeId> {
        debug_assert!(i < self.n && j < self.n, "({}, {}) outside {}x{} matrix", i, j, self.n, self.n);
        self.p[self.n * i + j]
    }

    #[inline]
    pub fn set(&mut self, i: NodeId, j: NodeId, pred: Option<NodeId>) {
        debug_assert!(i < self.n && j < self.n, "({}, {}) outside {}x{} matrix", i, j, self.n, self.n);
        self.p[self.n * i + j] = pred;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::from_edges;

    #[test]
    fn edges_and_diagonal_point_back_to_source() {
        let g = from_edges(&[(0, 1), (1, 2)]).unwrap();
        let preds = PredecessorMatrix::from_distances(&g).unwrap();
        assert_eq!(preds.len(), 3);
        assert_eq!(preds.get(0, 1), Some(0));
        assert_eq!(preds.get(1, 0), Some(1));
        assert_eq!(preds.get(2, 1), Some(2));
        assert_eq!(preds.get(1, 1), Some(1));
        assert_eq!(preds.get(0, 2), None);
        assert_eq!(preds.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 matrix")]
    #[cfg(debug_assertions)]
    fn out_of_range_set_is_caught() {
        let g = from_edges(&[(0, 2)]).unwrap();
        let mut preds = PredecessorMatrix::from_distances(&g).unwrap();
        preds.set(3, 0, Some(0));
    }

    #[test]
    fn defined_exactly_where_distance_is_finite() {
        let g = from_edges(&[(0, 3), (2, 3), (4, 4)]).unwrap();
        let preds = PredecessorMatrix::from_distances(&g).unwrap();
        for i in 0..g.len() {
            for j in 0..g.len() {
                assert_eq!(preds.get(i, j).is_some(), g.is_finite(i, j), "({}, {})", i, j);
            }
        }
    }
}

//! Rebuilding concrete paths from a predecessor matrix.

use crate::matrix::NodeId;
use crate::predecessors::PredecessorMatrix;

/// The nodes of the recorded shortest path from `i` to `j`, both ends included.
///
/// `[i]` when `i == j`, empty when `j` is unreachable from `i` or either id is
/// out of range. Predecessors are followed backwards from `j` with an explicit
/// stack, so long paths do not recurse.
pub fn reconstruct(preds: &PredecessorMatrix, i: NodeId, j: NodeId) -> Vec<NodeId> {
    let n = preds.len();
    if i >= n || j >= n {
        return Vec::new();
    }
    let mut path = vec![j];
    let mut current = j;
    while current != i {
        // A simple path has at most n nodes; anything longer means a cycle in `preds`
        if path.len() > n {
            return Vec::new();
        }
        match preds.get(i, current) {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

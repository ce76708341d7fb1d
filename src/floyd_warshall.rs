//! Floyd-Warshall all-pairs shortest paths with predecessor tracking.

use crate::error::{Error, Result};
use crate::matrix::{add_finite, Distance, DistanceMatrix, NodeId, INFINITY};
use crate::path;
use crate::predecessors::PredecessorMatrix;

/// Relax every pair through each pivot `k` in increasing order, updating
/// `dist` and `preds` in place. Returns how many entries improved.
///
/// Only a strictly shorter route replaces an entry, so among equal-length
/// paths the one first found through the lowest pivot is kept. The
/// predecessor of `j` on the new route is taken from the `k -> j` leg.
pub fn floyd_warshall(dist: &mut DistanceMatrix, preds: &mut PredecessorMatrix) -> Result<usize> {
    let n = dist.len();
    if preds.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: preds.len(),
        });
    }
    let mut updates = 0;
    for k in 0..n {
        for i in 0..n {
            let ik = dist.get(i, k);
            if ik == INFINITY {
                continue;
            }
            for j in 0..n {
                if let Some(z) = add_finite(ik, dist.get(k, j)) {
                    if z < dist.get(i, j) {
                        dist.set(i, j, z);
                        preds.set(i, j, preds.get(k, j));
                        updates += 1;
                    }
                }
            }
        }
    }
    Ok(updates)
}

/// Converged distances and predecessors for a graph.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    dist: DistanceMatrix,
    preds: PredecessorMatrix,
}

impl ShortestPaths {
    /// Initialize predecessors for `graph` and run the engine to completion.
    pub fn compute(graph: DistanceMatrix) -> Result<Self> {
        let mut dist = graph;
        let mut preds = PredecessorMatrix::from_distances(&dist)?;
        let updates = floyd_warshall(&mut dist, &mut preds)?;
        tracing::debug!(nodes = dist.len(), updates, "floyd-warshall converged");
        Ok(ShortestPaths { dist, preds })
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Shortest hop count from `i` to `j`, `None` if unreachable or either
    /// id is not a node of the graph.
    pub fn distance(&self, i: NodeId, j: NodeId) -> Option<Distance> {
        if i >= self.len() || j >= self.len() {
            return None;
        }
        Some(self.dist.get(i, j)).filter(|&d| d != INFINITY)
    }

    /// One shortest path from `i` to `j`, empty if unreachable.
    pub fn path(&self, i: NodeId, j: NodeId) -> Vec<NodeId> {
        path::reconstruct(&self.preds, i, j)
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.dist
    }

    pub fn predecessors(&self) -> &PredecessorMatrix {
        &self.preds
    }

    pub fn into_parts(self) -> (DistanceMatrix, PredecessorMatrix) {
        (self.dist, self.preds)
    }
}

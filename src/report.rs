//! Per-pair output of shortest paths.
//!
//! Each unordered pair `(i, j)` with `i <= j` is printed once, rows in
//! ascending `i` then `j`:
//!
//! ```text
//! (0, 2): 0 1 2
//! (0, 3):No path
//! ```

use std::fmt;
use std::io::{self, Write};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::floyd_warshall::ShortestPaths;
use crate::matrix::NodeId;

/// A pair of nodes and the shortest path between them, empty if unreachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairPath {
    pub i: NodeId,
    pub j: NodeId,
    pub path: Vec<NodeId>,
}

impl fmt::Display for PairPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}):", self.i, self.j)?;
        if self.path.is_empty() {
            return f.write_str("No path");
        }
        for node in &self.path {
            write!(f, " {}", node)?;
        }
        Ok(())
    }
}

/// Paths from `i` to every `j >= i`.
pub fn row(paths: &ShortestPaths, i: NodeId) -> Vec<PairPath> {
    (i..paths.len())
        .map(|j| PairPath { i, j, path: paths.path(i, j) })
        .collect()
}

/// All pairs `i <= j` in report order.
pub fn pair_paths(paths: &ShortestPaths) -> Vec<PairPath> {
    let n = paths.len();
    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<PairPath>> = (0..n).into_par_iter().map(|i| row(paths, i)).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<PairPath>> = (0..n).map(|i| row(paths, i)).collect();
    rows.into_iter().flatten().collect()
}

/// Write one line per pair. Returns the number of lines written.
pub fn write_report<W: Write>(out: &mut W, paths: &ShortestPaths) -> io::Result<usize> {
    let mut lines = 0;
    #[cfg(feature = "parallel")]
    for pair in pair_paths(paths) {
        writeln!(out, "{}", pair)?;
        lines += 1;
    }
    // Stream row by row instead of holding every path at once
    #[cfg(not(feature = "parallel"))]
    for i in 0..paths.len() {
        for pair in row(paths, i) {
            writeln!(out, "{}", pair)?;
            lines += 1;
        }
    }
    out.flush()?;
    Ok(lines)
}

/// Dump the distance matrix of `paths`, one row per line.
pub fn print_matrix<W: Write>(out: &mut W, paths: &ShortestPaths) -> io::Result<()> {
    write!(out, "{}", paths.distances())
}

//! Reading undirected, unweighted edge lists into a distance matrix.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::matrix::{DistanceMatrix, NodeId};

/// An undirected edge between two nodes.
pub type Edge = (NodeId, NodeId);

/// Parse one edge per line, `u v` separated by whitespace. Blank lines are skipped.
pub fn parse_edges(input: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [u, v] => edges.push((parse_node(u, line_no)?, parse_node(v, line_no)?)),
            other => {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("expected 2 node ids, found {} tokens", other.len()),
                })
            }
        }
    }
    Ok(edges)
}

fn parse_node(token: &str, line: usize) -> Result<NodeId> {
    token.parse::<NodeId>().map_err(|e| Error::Parse {
        line,
        message: format!("invalid node id `{}`: {}", token, e),
    })
}

/// Build the initial distance matrix: 1 for every edge (both directions),
/// 0 on the diagonal, infinity elsewhere.
///
/// The node count is the largest id seen plus one; an empty edge list gives
/// a single isolated node. Self-loops end up as 0 like every other diagonal entry.
pub fn from_edges(edges: &[Edge]) -> Result<DistanceMatrix> {
    let max_node = edges.iter().map(|&(u, v)| u.max(v)).max().unwrap_or(0);
    let n = max_node.checked_add(1).ok_or(Error::TooLarge { nodes: max_node })?;
    let mut graph = DistanceMatrix::unconnected(n)?;
    for &(u, v) in edges {
        graph.set(u, v, 1);
        graph.set(v, u, 1);
    }
    for i in 0..n {
        graph.set(i, i, 0);
    }
    Ok(graph)
}

/// Load an edge list file into a distance matrix.
pub fn read_graph(path: impl AsRef<Path>) -> Result<DistanceMatrix> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = parse_edges(&input)?;
    tracing::debug!(edges = edges.len(), path = %path.display(), "parsed edge list");
    from_edges(&edges)
}

//! Error types for loading graphs and computing shortest paths.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The edge list could not be opened or read.
    #[error("failed to read graph from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the edge list is not a pair of non-negative integers.
    #[error("malformed edge on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The node count does not fit a dense n*n matrix.
    #[error("graph with {nodes} nodes is too large for a dense matrix")]
    TooLarge { nodes: usize },

    /// Distance and predecessor matrices disagree on the node count.
    #[error("matrix dimension mismatch: expected {expected} nodes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_line() {
        let err = Error::Parse {
            line: 7,
            message: "expected 2 integers, found 3 tokens".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed edge on line 7: expected 2 integers, found 3 tokens"
        );
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err = Error::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

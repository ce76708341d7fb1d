//! All-pairs shortest paths over unweighted undirected graphs.
//!
//! An edge list is loaded into a dense distance matrix, Floyd-Warshall
//! fills in shortest hop counts while keeping a predecessor matrix, and
//! paths are rebuilt from the predecessors.
//!
//! ```
//! use floyd_paths::{loader, ShortestPaths};
//!
//! let graph = loader::from_edges(&[(0, 1), (1, 2), (3, 4)]).unwrap();
//! let paths = ShortestPaths::compute(graph).unwrap();
//! assert_eq!(paths.distance(0, 2), Some(2));
//! assert_eq!(paths.path(0, 2), vec![0, 1, 2]);
//! assert!(paths.path(0, 3).is_empty());
//! ```

pub mod error;
pub mod floyd_warshall;
pub mod loader;
pub mod matrix;
pub mod path;
pub mod predecessors;
pub mod report;

pub use error::{Error, Result};
pub use floyd_warshall::{floyd_warshall, ShortestPaths};
pub use matrix::{Distance, DistanceMatrix, NodeId, INFINITY};
pub use predecessors::PredecessorMatrix;

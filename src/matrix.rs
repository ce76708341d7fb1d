//! Dense row-major distance matrix.
//!
//! Entries are stored in a single `Vec` and addressed as `n*i + j`, so a row
//! of the matrix is a contiguous slice.

use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a graph node, also its row/column in the matrices.
pub type NodeId = usize;

/// Hop count between two nodes.
pub type Distance = u32;

/// Marks a pair with no known path. Never produced by adding two finite distances.
pub const INFINITY: Distance = Distance::MAX;

/// Add two distances, yielding `None` if either is infinite or the sum would
/// reach the infinity sentinel.
#[inline]
pub fn add_finite(x: Distance, y: Distance) -> Option<Distance> {
    if x == INFINITY || y == INFINITY {
        return None;
    }
    x.checked_add(y).filter(|&z| z != INFINITY)
}

/// Allocate an n*n buffer filled with `value`, or `TooLarge` if the cell
/// count or its byte size cannot be reserved.
pub(crate) fn square_buffer<T: Clone>(n: usize, value: T) -> Result<Vec<T>> {
    let cells = n.checked_mul(n).ok_or(Error::TooLarge { nodes: n })?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| Error::TooLarge { nodes: n })?;
    buf.resize(cells, value);
    Ok(buf)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    d: Vec<Distance>,
}

impl DistanceMatrix {
    /// An n*n matrix with every entry infinite.
    pub fn unconnected(n: usize) -> Result<Self> {
        Ok(DistanceMatrix { n, d: square_buffer(n, INFINITY)? })
    }

    /// Number of nodes, i.e. rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: NodeId, j: NodeId) -> Distance {
        debug_assert!(i < self.n && j < self.n, "({}, {}) outside {}x{} matrix", i, j, self.n, self.n);
        self.d[self.n * i + j]
    }

    #[inline]
    pub fn set(&mut self, i: NodeId, j: NodeId, value: Distance) {
        debug_assert!(i < self.n && j < self.n, "({}, {}) outside {}x{} matrix", i, j, self.n, self.n);
        self.d[self.n * i + j] = value;
    }

    pub fn is_finite(&self, i: NodeId, j: NodeId) -> bool {
        self.get(i, j) != INFINITY
    }

    pub fn row(&self, i: NodeId) -> &[Distance] {
        &self.d[self.n * i..self.n * (i + 1)]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// One row per line, entries separated by a space, infinity shown as `inf`.
impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            for (j, &x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if x == INFINITY {
                    f.write_str("inf")?;
                } else {
                    write!(f, "{}", x)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_finite_guards_infinity() {
        assert_eq!(add_finite(1, 2), Some(3));
        assert_eq!(add_finite(INFINITY, 0), None);
        assert_eq!(add_finite(0, INFINITY), None);
        assert_eq!(add_finite(INFINITY, INFINITY), None);
        assert_eq!(add_finite(INFINITY - 1, 1), None);
        assert_eq!(add_finite(INFINITY - 2, 1), Some(INFINITY - 1));
    }

    #[test]
    fn unconnected_matrix_is_all_infinite() {
        let m = DistanceMatrix::unconnected(3).unwrap();
        assert_eq!(m.len(), 3);
        assert!((0..3).all(|i| (0..3).all(|j| !m.is_finite(i, j))));
    }

    #[test]
    fn oversized_matrix_is_rejected() {
        let err = DistanceMatrix::unconnected(usize::MAX).unwrap_err();
        assert!(matches!(err, Error::TooLarge { nodes } if nodes == usize::MAX));
    }

    #[test]
    fn unallocatable_matrix_is_rejected() {
        // Cell count fits usize but the byte size does not
        let n = u32::MAX as usize;
        let err = DistanceMatrix::unconnected(n).unwrap_err();
        assert!(matches!(err, Error::TooLarge { nodes } if nodes == n));
    }

    #[test]
    #[should_panic(expected = "outside 2x2 matrix")]
    #[cfg(debug_assertions)]
    fn out_of_range_get_is_caught() {
        let m = DistanceMatrix::unconnected(2).unwrap();
        m.get(0, 3);
    }

    #[test]
    fn rows_are_contiguous() {
        let mut m = DistanceMatrix::unconnected(3).unwrap();
        m.set(1, 0, 4);
        m.set(1, 2, 5);
        assert_eq!(m.row(1), &[4, INFINITY, 5]);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn display_renders_infinity() {
        let mut m = DistanceMatrix::unconnected(2).unwrap();
        m.set(0, 0, 0);
        m.set(1, 1, 0);
        m.set(0, 1, 1);
        assert_eq!(m.to_string(), "0 1\ninf 0\n");
    }
}

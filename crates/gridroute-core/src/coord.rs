//! The [`Coord`] type — a 0-indexed (row, column) grid coordinate.

use std::fmt;

/// A 2D grid coordinate. Rows grow downward, columns grow rightward.
///
/// Coordinates are signed so that out-of-range input (including negative
/// values straight off the wire) can be represented and rejected explicitly
/// instead of failing during indexing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours (up, down, left, right).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_neighbors() {
        let c = Coord::new(2, 3);
        assert_eq!(c.shift(-1, 0), Coord::new(1, 3));
        let ns = c.neighbors_4();
        assert_eq!(ns[0], Coord::new(1, 3)); // up
        assert_eq!(ns[1], Coord::new(3, 3)); // down
        assert_eq!(ns[2], Coord::new(2, 2)); // left
        assert_eq!(ns[3], Coord::new(2, 4)); // right
    }

    #[test]
    fn row_major_ordering() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(1, -1)];
        v.sort();
        assert_eq!(
            v,
            vec![Coord::new(0, 5), Coord::new(1, -1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
    }
}

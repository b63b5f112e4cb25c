use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Neg, Sub},
};

/// A cell coordinate on the (unbounded) Life plane
///
/// Cells are addressed as `(row, col)`. Nothing stops a cell from sitting
/// outside the configured grid; such cells are simply never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

/// Offsets of the eight Moore neighbors of a cell
const NEIGHBOR_OFFSETS: [Cell; 8] = [
    Cell::new(-1, -1),
    Cell::new(-1, 0),
    Cell::new(-1, 1),
    Cell::new(0, -1),
    Cell::new(0, 1),
    Cell::new(1, -1),
    Cell::new(1, 0),
    Cell::new(1, 1),
];

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    /// `self + rhs`, or `None` if either coordinate leaves the `i32` range
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(rhs.row)?,
            col: self.col.checked_add(rhs.col)?,
        })
    }

    /// The orthogonally and diagonally adjacent cells
    ///
    /// There is no wraparound: neighbors of an edge cell may have negative
    /// coordinates or coordinates past the grid, and they are still valid cells.
    /// Only at the limits of `i32` are there fewer than eight, since the
    /// plane ends there.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.checked_add(offset))
    }
}
impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: rows first, then columns within a row
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
impl Neg for Cell {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            row: -self.row,
            col: -self.col,
        }
    }
}
impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row - rhs.row,
            col: self.col - rhs.col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_are_eight_distinct_cells() {
        for cell in [Cell::zero(), Cell::new(-3, 7), Cell::new(19, 19)] {
            let neighbors: HashSet<Cell> = cell.neighbors().collect();

            assert_eq!(neighbors.len(), 8);
            assert!(!neighbors.contains(&cell));
            assert!(neighbors.iter().all(|n| {
                let d = *n - cell;
                d.row.abs() <= 1 && d.col.abs() <= 1
            }));
        }
    }

    #[test]
    fn neighbors_of_origin_go_negative() {
        let neighbors: HashSet<Cell> = Cell::zero().neighbors().collect();

        assert!(neighbors.contains(&Cell::new(-1, -1)));
        assert!(neighbors.contains(&Cell::new(-1, 0)));
        assert!(neighbors.contains(&Cell::new(0, -1)));
    }

    #[test]
    fn neighbors_stop_at_the_integer_limits() {
        let corner: HashSet<Cell> = Cell::new(i32::MAX, i32::MIN).neighbors().collect();
        let edge: HashSet<Cell> = Cell::new(0, i32::MAX).neighbors().collect();

        assert_eq!(
            corner,
            HashSet::from([
                Cell::new(i32::MAX - 1, i32::MIN),
                Cell::new(i32::MAX - 1, i32::MIN + 1),
                Cell::new(i32::MAX, i32::MIN + 1),
            ])
        );
        assert_eq!(edge.len(), 5);
        // nothing wraps around to the other side
        assert!(edge.iter().all(|n| n.col >= i32::MAX - 1));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5), Cell::new(0, 1)];
        cells.sort();

        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 5), Cell::new(1, 0)]);
    }
}

//! Addressable grid bounds and surface-to-cell translation.

use crate::{Cell, Error, Result};

/// The visible part of the Life plane
///
/// `horizontal` is the number of columns and `vertical` the number of rows.
/// Bounds only decide what gets rendered; the simulation itself runs on the
/// whole plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    horizontal: i32,
    vertical: i32,
}

impl Grid {
    pub fn new(horizontal: i32, vertical: i32) -> Result<Self> {
        Self::check(horizontal, vertical)?;
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    fn check(horizontal: i32, vertical: i32) -> Result<()> {
        if horizontal <= 0 || vertical <= 0 {
            return Err(Error::InvalidBounds {
                horizontal,
                vertical,
            });
        }
        Ok(())
    }

    /// Replaces the bounds, leaving them untouched if either count is not positive
    pub fn set_bounds(&mut self, horizontal: i32, vertical: i32) -> Result<()> {
        Self::check(horizontal, vertical)?;
        if (horizontal, vertical) != (self.horizontal, self.vertical) {
            log::debug!(
                "grid bounds {}x{} -> {}x{}",
                self.horizontal,
                self.vertical,
                horizontal,
                vertical
            );
        }
        self.horizontal = horizontal;
        self.vertical = vertical;
        Ok(())
    }

    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.horizontal
    }
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.vertical
    }

    /// Per-axis `(width, height)` of one cell on a surface of the given size
    pub fn cell_size(&self, surface_width: f64, surface_height: f64) -> (f64, f64) {
        (
            surface_width / self.horizontal as f64,
            surface_height / self.vertical as f64,
        )
    }

    /// The cell containing the surface position `(x, y)`
    ///
    /// Each axis is divided by its cell size and rounded toward zero. No bounds
    /// check happens here, see [`Grid::is_within_bounds`].
    pub fn coordinate_of(&self, (x, y): (f64, f64), (width, height): (f64, f64)) -> Cell {
        Cell {
            row: (y / height).trunc() as i32,
            col: (x / width).trunc() as i32,
        }
    }

    #[inline]
    pub fn is_within_bounds(&self, cell: Cell) -> bool {
        (0..self.vertical).contains(&cell.row) && (0..self.horizontal).contains(&cell.col)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            horizontal: 20,
            vertical: 20,
        }
    }
}

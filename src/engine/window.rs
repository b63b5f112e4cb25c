use super::{Lifecycle, Simulation};
use crate::{Cell, Grid};

/// How the renderer should paint alive cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// The grid is being edited
    Drawing,
    /// A simulation is in progress
    Running,
}

impl From<Lifecycle> for CellStyle {
    fn from(state: Lifecycle) -> Self {
        match state {
            Lifecycle::Editing => Self::Drawing,
            Lifecycle::Running => Self::Running,
        }
    }
}

/// A read-only snapshot of everything a renderer needs for one redraw
///
/// Only cells inside the grid bounds are included, sorted row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    style: CellStyle,
    grid: Grid,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(engine: &Simulation, grid: Grid) -> Self {
        let mut cells: Vec<Cell> = engine
            .alive()
            .copied()
            .filter(|&cell| grid.is_within_bounds(cell))
            .collect();
        cells.sort_unstable();

        Self {
            style: engine.state().into(),
            grid,
            cells,
        }
    }

    #[inline]
    pub fn style(&self) -> CellStyle {
        self.style
    }
    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last = Cell::new(0, -1);
        for &alive in &self.cells {
            // determine the number of lines to print
            let lines = alive.row - last.row;
            // determine the number of padding spaces to print
            let padding = match lines {
                0 => alive.col - last.col - 1,
                _ => alive.col,
            };
            write!(
                f,
                "{0:\n<1$}{0: <2$}█",
                "", lines as usize, padding as usize
            )?;
            last = alive;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn frame_drops_cells_outside_bounds() {
        let engine = Simulation::from_alive(cells(&[(0, 0), (-1, 2), (2, 1), (1, 5)]));
        let grid = Grid::new(3, 3).unwrap();

        let frame = engine.frame(grid);

        assert_eq!(frame.cells(), cells(&[(0, 0), (2, 1)]).as_slice());
        assert_eq!(frame.style(), CellStyle::Drawing);
    }

    #[test]
    fn frame_style_follows_lifecycle() {
        let mut engine = Simulation::from_alive(cells(&[(1, 0), (1, 1), (1, 2)]));
        engine.run();

        assert_eq!(engine.frame(Grid::default()).style(), CellStyle::Running);
    }

    #[test]
    fn frame_is_sorted_regardless_of_insertion() {
        let engine = Simulation::from_alive(cells(&[(3, 3), (0, 2), (3, 0), (0, 1)]));

        let frame = engine.frame(Grid::default());

        assert_eq!(frame.cells(), cells(&[(0, 1), (0, 2), (3, 0), (3, 3)]).as_slice());
    }

    #[test]
    fn display_draws_rows() {
        let engine = Simulation::from_alive(cells(&[(0, 1), (1, 1), (2, 1), (2, 3)]));

        let drawn = engine.frame(Grid::default()).to_string();

        assert_eq!(drawn, " █\n █\n █ █");
    }
}

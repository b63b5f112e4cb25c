use cgolpaint::{Cadence, CellStyle, Grid, Result, Simulation};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::{
    io::{self, Write},
    time::Duration,
};

/// Terminal columns per cell, bounded so cells stay visible
const ZOOM_RANGE: std::ops::RangeInclusive<u16> = 1..=4;

/// Grid bounds for a drawable `surface` of terminal cells
///
/// Each requested count wins over the one derived from the terminal, which is
/// one cell per `zoom` columns and one per row.
fn fit_bounds(
    surface: (u16, u16),
    zoom: u16,
    (horizontal, vertical): (Option<i32>, Option<i32>),
) -> (i32, i32) {
    (
        horizontal.unwrap_or_else(|| i32::from((surface.0 / zoom).max(1))),
        vertical.unwrap_or_else(|| i32::from(surface.1)),
    )
}

/// The terminal cells `[start, end)` covering grid line `index` of `size` cells each
///
/// A cell covers every position that truncates to it.
fn span(index: i32, size: f64) -> (u16, u16) {
    let start = (f64::from(index) * size).ceil() as u16;
    let end = ((f64::from(index) + 1.0) * size).ceil() as u16;
    (start, end)
}

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Draws a [`Simulation`] in the terminal and turns mouse and key input into
/// engine calls
pub struct ConsoleRender {
    grid: Grid,
    /// drawable area in terminal cells, excluding the footer row
    surface: (u16, u16),
    zoom: u16,
    /// bounds pinned from the command line, per axis
    requested: (Option<i32>, Option<i32>),
    /// membership the current drag gesture paints, if a gesture is active
    painting: Option<bool>,
    report: String,
}
impl ConsoleRender {
    pub fn new(requested: (Option<i32>, Option<i32>)) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let mut console = Self {
            grid: Grid::default(),
            surface: (1, 1),
            zoom: 2,
            requested,
            painting: None,
            report: String::new(),
        };
        let (cols, rows) = terminal::size()?;
        console.fit(cols, rows)?;
        Ok(console)
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn cell_size(&self) -> (f64, f64) {
        self.grid
            .cell_size(f64::from(self.surface.0), f64::from(self.surface.1))
    }

    /// Recomputes the grid bounds for a terminal of `cols` by `rows`
    fn fit(&mut self, cols: u16, rows: u16) -> Result<()> {
        let surface = (cols.max(1), rows.saturating_sub(1).max(1));
        let (horizontal, vertical) = fit_bounds(surface, self.zoom, self.requested);
        self.grid.set_bounds(horizontal, vertical)?;
        self.surface = surface;
        Ok(())
    }

    fn zoom(&mut self, delta: i16) -> Result<()> {
        let zoom = self.zoom.saturating_add_signed(delta);
        if !ZOOM_RANGE.contains(&zoom) {
            return Ok(());
        }
        self.zoom = zoom;
        let (cols, rows) = terminal::size()?;
        self.fit(cols, rows)
    }

    pub fn render(&self, game: &Simulation) -> Result<()> {
        let frame = game.frame(self.grid);
        let color = match frame.style() {
            CellStyle::Drawing => Color::DarkGrey,
            CellStyle::Running => Color::White,
        };
        let (width, height) = self.cell_size();

        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            SetForegroundColor(color)
        )?;
        for cell in frame.cells() {
            let (left, right) = span(cell.col, width);
            let (top, bottom) = span(cell.row, height);
            let block = "█".repeat(usize::from(right.saturating_sub(left)));
            for row in top..bottom {
                queue!(stdout, cursor::MoveTo(left, row), Print(&block))?;
            }
        }

        // write footer
        queue!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, self.surface.1),
            Print(&self.report)
        )?;

        stdout.flush()?;
        Ok(())
    }

    /// Handles every pending event, waiting at most `timeout` for the first
    pub fn poll_events(
        &mut self,
        game: &mut Simulation,
        cadence: &mut Cadence,
        timeout: Duration,
    ) -> Result<Option<ConsoleCommand>> {
        // make sure event is present for us to take
        if !event::poll(timeout)? {
            return Ok(None);
        }

        loop {
            if let ConsoleCommand::Exit = self.handle(game, cadence, event::read()?)? {
                return Ok(Some(ConsoleCommand::Exit));
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(Some(ConsoleCommand::Handled));
            }
        }
    }

    fn handle(
        &mut self,
        game: &mut Simulation,
        cadence: &mut Cadence,
        event: Event,
    ) -> Result<ConsoleCommand> {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => return Ok(ConsoleCommand::Exit),
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char(' ') if game.is_running() => game.reset(),
                KeyCode::Char(' ') => game.run(),
                KeyCode::Backspace => game.stop(),
                KeyCode::Char('+') => cadence.faster(),
                KeyCode::Char('-') => cadence.slower(),
                _ => {}
            },
            Event::Mouse(mouse) => self.mouse(game, mouse)?,
            Event::Resize(cols, rows) => self.fit(cols, rows)?,
            _ => {}
        }
        Ok(ConsoleCommand::Handled)
    }

    fn mouse(&mut self, game: &mut Simulation, mouse: MouseEvent) -> Result<()> {
        let position = (f64::from(mouse.column), f64::from(mouse.row));
        let cell = self.grid.coordinate_of(position, self.cell_size());
        let on_grid = self.grid.is_within_bounds(cell);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_grid => {
                self.painting = game.toggle_cell(cell);
            }
            MouseEventKind::Drag(MouseButton::Left) if on_grid => {
                if let Some(alive) = self.painting {
                    game.paint_cell(cell, !alive);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.painting = None,
            MouseEventKind::ScrollUp => self.zoom(1)?,
            MouseEventKind::ScrollDown => self.zoom(-1)?,
            _ => {}
        }
        Ok(())
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        if let Err(e) = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        ) {
            log::warn!("failed to restore terminal: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to disable raw mode: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_the_terminal_by_default() {
        assert_eq!(fit_bounds((80, 23), 2, (None, None)), (40, 23));
        assert_eq!(fit_bounds((81, 23), 4, (None, None)), (20, 23));
        assert_eq!(fit_bounds((1, 1), 4, (None, None)), (1, 1));
    }

    #[test]
    fn requested_bounds_win_per_axis() {
        assert_eq!(fit_bounds((80, 23), 2, (Some(10), Some(5))), (10, 5));
        assert_eq!(fit_bounds((80, 23), 2, (Some(10), None)), (10, 23));
        assert_eq!(fit_bounds((80, 23), 2, (None, Some(7))), (40, 7));
    }

    #[test]
    fn spans_cover_positions_that_truncate_to_the_cell() {
        let grid = Grid::new(10, 5).unwrap();
        let size = grid.cell_size(80.0, 23.0);

        for index in 0..5 {
            let (top, bottom) = span(index, size.1);
            for row in top..bottom {
                let cell = grid.coordinate_of((0.0, f64::from(row)), size);
                assert_eq!(cell.row, index);
            }
        }
        assert_eq!(span(0, 8.0), (0, 8));
        assert_eq!(span(3, 8.0), (24, 32));
    }
}

//! Pattern decoders used to seed the editing grid.

use crate::{Cell, Error, Result};
use regex::Regex;
use std::path::Path;

pub trait PatternDecoder {
    fn decode(&self, value: &str) -> Result<Vec<Cell>>;
}

/// Picks a decoder from the file extension, `.cells` for plaintext and
/// run-length encoding for anything else
pub fn decoder_for<P: AsRef<Path>>(path: P) -> Box<dyn PatternDecoder> {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("cells") => Box::new(Plaintext),
        _ => Box::new(RunLengthEncoded::default()),
    }
}

/// Reads and decodes a pattern file
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Cell>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let cells = decoder_for(&path).decode(&text)?;
    log::info!(
        "loaded {} cells from {}",
        cells.len(),
        path.as_ref().display()
    );
    Ok(cells)
}

/// Patterns may span at most this many cells along either axis
pub const MAX_EXTENT: i32 = 1024;

fn regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))
}

/// Moves `pos` forward by `run`, staying within [`MAX_EXTENT`]
fn advance(pos: i32, run: i32, axis: &str) -> Result<i32> {
    match pos.checked_add(run) {
        Some(end) if end <= MAX_EXTENT => Ok(end),
        _ => Err(Error::Pattern(format!(
            "pattern extends past {MAX_EXTENT} {axis}s"
        ))),
    }
}

/// The run-length encoded format (`bo$obo!`)
///
/// Header lines (`x = .., y = .., rule = ..`) and `#` comments are skipped.
/// The top-left of the pattern lands on `(0, 0)` shifted by `origin`.
#[derive(Debug, Default)]
pub struct RunLengthEncoded {
    origin: Cell,
}
impl RunLengthEncoded {
    pub fn set_origin(mut self, origin: Cell) -> Self {
        self.origin = origin;
        self
    }
}

impl PatternDecoder for RunLengthEncoded {
    fn decode(&self, value: &str) -> Result<Vec<Cell>> {
        let token = regex(r"(\d*)([bo$!])")?;
        let valid = regex(r"^(\s*\d*[bo$!])*\s*$")?;

        let mut alive = Vec::new();
        let mut cursor = Cell::zero();
        'lines_loop: for (n, mut line) in value.lines().enumerate() {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            if line.trim_start().starts_with('x') {
                continue;
            }
            if !valid.is_match(line) {
                return Err(Error::Pattern(format!(
                    "unexpected run-length data on line {}: {:?}",
                    n + 1,
                    line.trim()
                )));
            }

            for (_, [run_str, state]) in token.captures_iter(line).map(|x| x.extract()) {
                let run = match run_str {
                    "" => 1,
                    digits => digits
                        .parse::<i32>()
                        .map_err(|e| Error::Pattern(format!("bad run {digits:?}: {e}")))?,
                };
                match state {
                    "!" => break 'lines_loop,
                    "o" if cursor.row >= MAX_EXTENT => {
                        return Err(Error::Pattern(format!(
                            "pattern extends past {MAX_EXTENT} rows"
                        )));
                    }
                    "o" => {
                        let end = advance(cursor.col, run, "column")?;
                        for col in cursor.col..end {
                            let cell = Cell::new(cursor.row, col);
                            alive.push(cell.checked_add(self.origin).ok_or_else(|| {
                                Error::Pattern(format!("{cell} moved past the plane by the origin"))
                            })?);
                        }
                        cursor.col = end;
                    }
                    "b" => cursor.col = advance(cursor.col, run, "column")?,
                    "$" => {
                        cursor.col = 0;
                        cursor.row = advance(cursor.row, run, "row")?;
                    }
                    _ => unreachable!(),
                }
            }
        }

        Ok(alive)
    }
}

/// The plaintext format, one row per line with `O` alive and `.` dead
///
/// Lines starting with `!` are comments.
#[derive(Debug, Default)]
pub struct Plaintext;

impl PatternDecoder for Plaintext {
    fn decode(&self, value: &str) -> Result<Vec<Cell>> {
        let rows: Vec<&str> = value.lines().filter(|line| !line.starts_with('!')).collect();
        if rows.len() > MAX_EXTENT as usize {
            return Err(Error::Pattern(format!(
                "pattern extends past {MAX_EXTENT} rows"
            )));
        }

        let mut alive = Vec::new();
        for (row, line) in (0..).zip(rows) {
            let line = line.trim_end();
            if line.chars().count() > MAX_EXTENT as usize {
                return Err(Error::Pattern(format!(
                    "row {row} extends past {MAX_EXTENT} columns"
                )));
            }
            for (col, c) in (0..).zip(line.chars()) {
                match c {
                    'O' | '*' => alive.push(Cell::new(row, col)),
                    '.' => {}
                    other => {
                        return Err(Error::Pattern(format!(
                            "unexpected {other:?} at row {row}, column {col}"
                        )));
                    }
                }
            }
        }
        Ok(alive)
    }
}

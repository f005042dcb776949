//! Window rendering and output formatting utilities

use crate::error::{LifeError, Result};
use crate::game_of_life::Board;
use crate::world::FrameSink;
use anyhow::Context;
use itertools::Itertools;
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// A board position in `"<col>,<row>"` form, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    pub col: usize,
    pub row: usize,
}

impl Vector {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Parse `"<col>,<row>"`. Missing or unparseable parts read as 0 and are
    /// clamped later by [`validate_range`].
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',').map(|part| part.trim().parse::<usize>().unwrap_or(0));
        let col = parts.next().unwrap_or(0);
        let row = parts.next().unwrap_or(0);
        Self { col, row }
    }

    fn clamped(self, rows: usize, columns: usize) -> Self {
        Self {
            col: self.col.clamp(1, columns.max(1)),
            row: self.row.clamp(1, rows.max(1)),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// Clamp both corners into `[1, columns] x [1, rows]`; an inverted result is
/// rejected rather than swapped.
pub fn validate_range(from: Vector, to: Vector, rows: usize, columns: usize) -> Result<(Vector, Vector)> {
    let from = from.clamped(rows, columns);
    let to = to.clamped(rows, columns);
    if from.col > to.col || from.row > to.row {
        return Err(LifeError::RangeIncorrect {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok((from, to))
}

/// Glyph grid for one window of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub generation: usize,
    pub from: Vector,
    pub to: Vector,
    pub cells: Vec<Vec<char>>,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generation {} [{} .. {}]",
            self.generation, self.from, self.to
        )?;
        write!(
            f,
            "{}",
            self.cells.iter().map(|line| line.iter().collect::<String>()).join("\n")
        )
    }
}

/// Projects board windows into glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub alive: char,
    pub dead: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            alive: '█',
            dead: '·',
        }
    }
}

impl Renderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    /// Render the window `from ..= to` of `board`, validating the range first
    pub fn render(&self, board: &Board, generation: usize, from: Vector, to: Vector) -> Result<Frame> {
        let (from, to) = validate_range(from, to, board.rows(), board.columns())?;

        let cells = (from.row..=to.row)
            .map(|r| {
                (from.col..=to.col)
                    .map(|c| if board.get_cell(r, c) { self.alive } else { self.dead })
                    .collect()
            })
            .collect();

        Ok(Frame {
            generation,
            from,
            to,
            cells,
        })
    }
}

/// Writes frames to stdout, clearing the screen between them and sleeping for
/// the refresh interval after each one
pub struct TerminalSink {
    clear: bool,
}

impl TerminalSink {
    pub fn new(clear: bool) -> Self {
        Self { clear }
    }
}

impl FrameSink for TerminalSink {
    fn present(&mut self, frame: &Frame, refresh: Duration) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        if self.clear {
            write!(stdout, "\x1b[2J\x1b[H").context("Failed to clear terminal")?;
        }
        writeln!(stdout, "{}", frame).context("Failed to write frame")?;
        stdout.flush().context("Failed to flush stdout")?;
        drop(stdout);

        if !refresh.is_zero() {
            std::thread::sleep(refresh);
        }
        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_parsing() {
        assert_eq!(Vector::parse("4,7"), Vector::new(4, 7));
        assert_eq!(Vector::parse(" 4 , 7 "), Vector::new(4, 7));
        assert_eq!(Vector::parse("x,3"), Vector::new(0, 3));
        assert_eq!(Vector::parse(""), Vector::new(0, 0));
        assert_eq!(Vector::new(12, 3).to_string(), "12,3");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = validate_range(Vector::parse("20,1"), Vector::parse("1,1"), 15, 15);
        assert!(matches!(result, Err(LifeError::RangeIncorrect { .. })));
    }

    #[test]
    fn test_range_is_clamped() {
        let (from, to) = validate_range(Vector::parse("0,0"), Vector::parse("99,99"), 15, 20).unwrap();
        assert_eq!(from, Vector::new(1, 1));
        assert_eq!(to, Vector::new(20, 15));
    }

    #[test]
    fn test_render_window() {
        let mut board = Board::empty(15, 15);
        board.set_cell(2, 3);
        board.set_cell(3, 2);

        let renderer = Renderer::new('#', '.');
        let frame = renderer
            .render(&board, 4, Vector::new(2, 2), Vector::new(4, 3))
            .unwrap();

        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.cells, vec![vec!['.', '#', '.'], vec!['#', '.', '.']]);
        assert_eq!(frame.to_string(), "Generation 4 [2,2 .. 4,3]\n.#.\n#..");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
        assert!(ColorOutput::success("OK").contains("OK"));
    }
}

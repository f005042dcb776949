//! Plain-text import and export of boards

use super::Board;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a board from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<Board> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read board file: {}", path.as_ref().display()))?;

    parse_board_from_string(&content)
        .with_context(|| format!("Failed to parse board from file: {}", path.as_ref().display()))
}

/// Parse a board from its string representation
pub fn parse_board_from_string(content: &str) -> Result<Board> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Board file is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx + 1,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at row {}, column {}. Only '0' and '1' are allowed",
                    ch,
                    row_idx + 1,
                    col_idx + 1
                ),
            }
        }
        cells.push(row);
    }

    Board::from_cells(cells)
}

/// Save a board to a text file
pub fn save_board_to_file<P: AsRef<Path>>(board: &Board, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, board_to_string(board))
        .with_context(|| format!("Failed to write board to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a board to its string representation
pub fn board_to_string(board: &Board) -> String {
    let mut result = String::with_capacity(board.rows() * (board.columns() + 1));

    for r in 1..=board.rows() {
        for c in 1..=board.columns() {
            result.push(if board.get_cell(r, c) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

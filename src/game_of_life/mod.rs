//! Game of Life core functionality

pub mod bit_row;
pub mod board;
pub mod engine;
pub mod io;
pub mod patterns;
pub mod rules;

pub use bit_row::BitRow;
pub use board::Board;
pub use engine::TransitionEngine;
pub use io::{board_to_string, load_board_from_file, parse_board_from_string, save_board_to_file};
pub use patterns::{Pattern, Variant};
pub use rules::RuleSpec;

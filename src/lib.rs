//! A two-player console implementation of the board game 'Connect 4'
//!
//! Players take turns dropping tokens into a 7-wide, 6-high grid; the
//! first to line up four of their own tokens in a row, column or diagonal
//! wins, and a full grid with no line is a draw.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four::board::{Board, GameState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! let state = board.apply_move(3)?;
//!
//! assert!(state == GameState::Playing);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// ensure that a run of four tokens fits on the board in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);

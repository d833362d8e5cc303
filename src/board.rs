use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        match self {
            GameState::Playing => false,
            _ => true,
        }
    }
}

/// The full state of one game: the grid, whose turn it is and whether the
/// game has finished. Row 0 is the bottom row, tokens fall towards it.
#[derive(Clone)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    pub player_one: bool,
    pub state: GameState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            player_one: true,
            state: GameState::Playing,
        }
    }

    /// Builds a board by playing out a string of 1-indexed column digits,
    /// e.g. "112233". Fails on the first unparseable or invalid move.
    pub fn from_str(moves: &str) -> Result<Self> {
        let mut board = Self::new();

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) if column >= 1 => {
                    let _ = board.apply_move(column as usize - 1)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Returns the game to its starting position: empty grid, player one
    /// to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[column + WIDTH * row]
    }

    /// A column accepts a token while it is on the board and its top cell
    /// is still empty.
    pub fn is_valid_move(&self, column: usize) -> bool {
        column < WIDTH && self.cell(HEIGHT - 1, column).is_empty()
    }

    /// The row the next token in this column would land on, or `None` if
    /// the column is full.
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cell(row, column).is_empty())
    }

    /// Drops the current player's token into `column` (0-indexed) and
    /// returns the resulting game state. The move is rejected without
    /// changing anything if the game is already over, the column is out of
    /// range or the column is full. The turn only passes to the other
    /// player when the move leaves the game in progress.
    pub fn apply_move(&mut self, column: usize) -> Result<GameState> {
        if self.state.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        let row = match self.lowest_empty_row(column) {
            Some(row) => row,
            None => return Err(anyhow!("Invalid move, column {} full", column + 1)),
        };

        let mark = self.current_mark();
        self.cells[column + WIDTH * row] = mark;

        if self.check_winning_move(row, column) {
            self.state = if self.player_one {
                GameState::PlayerOneWin
            } else {
                GameState::PlayerTwoWin
            };
        } else if self.is_full() {
            self.state = GameState::Draw;
        } else {
            self.player_one = !self.player_one;
        }

        Ok(self.state)
    }

    pub fn current_mark(&self) -> Cell {
        if self.player_one {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Checks whether the token just placed at `(row, column)` completed a
    /// run of four. Scans the whole row, the whole column, and the single
    /// diagonal and anti-diagonal that pass through the cell, with their
    /// start points clamped to the board edge.
    fn check_winning_move(&self, row: usize, column: usize) -> bool {
        let mark = self.cell(row, column);

        // horizontal
        let mut count = 0;
        for c in 0..WIDTH {
            if self.cell(row, c) == mark {
                count += 1;
                if count >= 4 {
                    return true;
                }
            } else {
                count = 0;
            }
        }

        // vertical
        count = 0;
        for r in 0..HEIGHT {
            if self.cell(r, column) == mark {
                count += 1;
                if count >= 4 {
                    return true;
                }
            } else {
                count = 0;
            }
        }

        // diagonal, low-left to high-right
        let offset = row.min(column);
        let (start_row, start_col) = (row - offset, column - offset);
        count = 0;
        for i in 0..HEIGHT {
            if start_row + i >= HEIGHT || start_col + i >= WIDTH {
                break;
            }
            if self.cell(start_row + i, start_col + i) == mark {
                count += 1;
                if count >= 4 {
                    return true;
                }
            } else {
                count = 0;
            }
        }

        // anti-diagonal, high-left to low-right
        let offset = (HEIGHT - 1 - row).min(column);
        let (start_row, start_col) = (row + offset, column - offset);
        count = 0;
        for i in 0..HEIGHT {
            if i > start_row || start_col + i >= WIDTH {
                break;
            }
            if self.cell(start_row - i, start_col + i) == mark {
                count += 1;
                if count >= 4 {
                    return true;
                }
            } else {
                count = 0;
            }
        }

        false
    }
}

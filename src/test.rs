#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Cell, GameState};
    use crate::{HEIGHT, WIDTH};

    // fills all 42 cells without ever lining up four: columns 1/3, 2/4 and
    // 5/7 are filled as interleaved pairs, column 6 last
    const DRAW_GAME: &str = "133113311331244224422442577557755775666666";

    // same idea, but arranged so the token that fills the last cell also
    // completes a vertical four for player two in column 7
    const LAST_CELL_WIN_GAME: &str = "133113311331225522552255666674774764674447";

    #[test]
    pub fn tokens_stack_from_bottom() -> Result<()> {
        let mut board = Board::new();

        for _ in 0..4 {
            board.apply_move(3)?;
        }

        assert_eq!(board.cell(0, 3), Cell::PlayerOne);
        assert_eq!(board.cell(1, 3), Cell::PlayerTwo);
        assert_eq!(board.cell(2, 3), Cell::PlayerOne);
        assert_eq!(board.cell(3, 3), Cell::PlayerTwo);
        assert_eq!(board.cell(4, 3), Cell::Empty);
        assert_eq!(board.cell(5, 3), Cell::Empty);
        assert_eq!(board.lowest_empty_row(3), Some(4));
        assert_eq!(board.state, GameState::Playing);
        Ok(())
    }

    #[test]
    pub fn out_of_range_column_rejected() -> Result<()> {
        let mut board = Board::new();

        assert!(!board.is_valid_move(WIDTH));
        assert!(board.apply_move(WIDTH).is_err());

        // nothing may have changed
        assert!(board.player_one);
        assert_eq!(board.state, GameState::Playing);
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                assert_eq!(board.cell(row, column), Cell::Empty);
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_column_rejected() -> Result<()> {
        let mut board = Board::from_str("444444")?;

        assert_eq!(board.lowest_empty_row(3), None);
        assert!(!board.is_valid_move(3));

        let player_before = board.player_one;
        assert!(board.apply_move(3).is_err());

        assert_eq!(board.player_one, player_before);
        assert_eq!(board.state, GameState::Playing);
        Ok(())
    }

    #[test]
    pub fn horizontal_win() -> Result<()> {
        // player one takes the bottom row of columns 1-4
        let board = Board::from_str("1122334")?;

        assert_eq!(board.state, GameState::PlayerOneWin);
        Ok(())
    }

    #[test]
    pub fn vertical_win() -> Result<()> {
        let board = Board::from_str("1212121")?;

        assert_eq!(board.state, GameState::PlayerOneWin);
        // the winner keeps the turn, the game just stops
        assert!(board.player_one);
        Ok(())
    }

    #[test]
    pub fn diagonal_win() -> Result<()> {
        // player one builds (0,0) (1,1) (2,2) (3,3)
        let board = Board::from_str("12234334744")?;

        assert_eq!(board.state, GameState::PlayerOneWin);
        Ok(())
    }

    #[test]
    pub fn anti_diagonal_win() -> Result<()> {
        // player one builds (0,3) (1,2) (2,1) (3,0)
        let board = Board::from_str("43321221711")?;

        assert_eq!(board.state, GameState::PlayerOneWin);
        Ok(())
    }

    #[test]
    pub fn full_board_without_line_is_a_draw() -> Result<()> {
        let mut board = Board::from_str(DRAW_GAME)?;

        assert!(board.is_full());
        assert_eq!(board.state, GameState::Draw);

        // terminal states accept no further moves
        assert!(board.apply_move(0).is_err());
        Ok(())
    }

    #[test]
    pub fn win_on_the_final_cell_beats_draw() -> Result<()> {
        let board = Board::from_str(LAST_CELL_WIN_GAME)?;

        assert!(board.is_full());
        assert_eq!(board.state, GameState::PlayerTwoWin);
        Ok(())
    }

    #[test]
    pub fn reset_restores_the_starting_position() -> Result<()> {
        let mut board = Board::from_str("1212121")?;
        assert_eq!(board.state, GameState::PlayerOneWin);

        board.reset();

        assert!(board.player_one);
        assert_eq!(board.state, GameState::Playing);
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                assert_eq!(board.cell(row, column), Cell::Empty);
            }
        }
        assert_eq!(board.apply_move(0)?, GameState::Playing);
        Ok(())
    }

    #[test]
    pub fn bad_move_strings_rejected() -> Result<()> {
        assert!(Board::from_str("12x3").is_err());
        assert!(Board::from_str("0").is_err());
        assert!(Board::from_str("8").is_err());
        Ok(())
    }
}

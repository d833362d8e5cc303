use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect_four::board::{Board, Cell, GameState};
use connect_four::{HEIGHT, WIDTH};

fn main() -> Result<()> {
    let stdin = stdin();
    let mut board = Board::new();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        display(&board)?;

        match board.state {
            GameState::Playing => {
                let player = if board.player_one { 1 } else { 2 };
                print!("Player {}'s turn. Enter column number (1-{}): ", player, WIDTH);
                stdout().flush()?;

                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 && column <= WIDTH => column,
                    _ => {
                        println!(
                            "Invalid input. Please enter a valid column number (1-{}).",
                            WIDTH
                        );
                        continue;
                    }
                };

                // adjust the 1-indexed column to the engine's 0-indexed one
                if let Err(err) = board.apply_move(column - 1) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins! It's a Connect 4!");
                if !restart(&stdin)? {
                    break;
                }
                board.reset();
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins! It's a Connect 4!");
                if !restart(&stdin)? {
                    break;
                }
                board.reset();
            }
            GameState::Draw => {
                println!("It's a draw!");
                if !restart(&stdin)? {
                    break;
                }
                board.reset();
            }
        }
    }
    Ok(())
}

/// Clears the terminal and redraws the board, top row first so the tokens
/// sit above the column labels.
fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;

    for row in (0..HEIGHT).rev() {
        stdout.queue(PrintStyledContent(style("| ")))?;
        for column in 0..WIDTH {
            stdout
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell(row, column) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?
                .queue(PrintStyledContent(style(" ")))?;
        }
        stdout.queue(PrintStyledContent(style("|\n")))?;
    }

    let labels: String = (1..=WIDTH).map(|x| format!("{} ", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("  {}\n\n", labels))))?;
    stdout.flush()?;
    Ok(())
}

/// Asks whether to play another game, re-prompting until the answer is
/// recognisable.
fn restart(stdin: &std::io::Stdin) -> Result<bool> {
    loop {
        print!("Restart? y/n: ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

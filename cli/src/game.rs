use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    minimax, Board, GameState, GameStatus, Player, BOARD_SIZE, SEARCH_DEPTH,
};
use common::log;

use crate::config::Config;

pub fn run(config: &Config) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let state = play(config, &mut reader)?;
    log!("Game over: {:?}", state.status);

    Ok(())
}

/// The turn loop: human input, then the engine's reply, until the
/// game ends. Board and messages go to stdout; the board is shown at
/// startup and after each completed round.
fn play<R: BufRead>(config: &Config, reader: &mut R) -> Result<GameState, String> {
    let mut state = GameState::new();

    println!("Welcome to Tic-Tac-Toe!");
    print_board(&state.board);

    loop {
        let (row, col) = read_move(reader, &state.board)?;
        if let Err(e) = state.place_mark(row, col) {
            log!("Move rejected: {}", e);
            continue;
        }

        match state.status {
            GameStatus::HumanWon => {
                println!("You won! Congratulations!");
                break;
            }
            GameStatus::Draw => {
                println!("It's a tie!");
                break;
            }
            _ => {}
        }

        let result = minimax(&mut state.board, SEARCH_DEPTH, Player::Computer);
        let Some(pos) = result.best_move else {
            break;
        };
        if config.log_bot_scores {
            log!(
                "Computer plays ({}, {}) with score {}",
                pos.row,
                pos.col,
                result.score
            );
        }
        state
            .place_mark(pos.row as i32, pos.col as i32)
            .map_err(|e| format!("Computer move failed: {}", e))?;

        match state.status {
            GameStatus::ComputerWon => {
                println!("Computer won!");
                break;
            }
            GameStatus::Draw => {
                println!("It's a tie!");
                break;
            }
            _ => {}
        }

        print_board(&state.board);
    }

    Ok(state)
}

/// Prompts until a line parses as two in-range 1-based coordinates
/// naming an empty cell. Returns 0-based coordinates.
fn read_move<R: BufRead>(reader: &mut R, board: &Board) -> Result<(i32, i32), String> {
    loop {
        print!("Enter your move (row [1-3] column [1-3]): ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        let mut line = String::new();
        let bytes_read = reader
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes_read == 0 {
            return Err("Input stream closed before the game finished".to_string());
        }

        match parse_move(&line) {
            Some((row, col)) if board.is_valid_move(row, col) => return Ok((row, col)),
            _ => println!("Invalid move. Please try again."),
        }
    }
}

/// Two whitespace-separated integers, 1-based, converted to 0-based.
/// Anything else (including trailing tokens) is rejected.
fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row: i32 = parts.next()?.parse().ok()?;
    let col: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row - 1, col - 1))
}

fn print_board(board: &Board) {
    println!("-------------");
    for row in 0..BOARD_SIZE {
        println!(
            "| {} | {} | {} |",
            board.at(row, 0).symbol(),
            board.at(row, 1).symbol(),
            board.at(row, 2).symbol()
        );
        println!("-------------");
    }
}

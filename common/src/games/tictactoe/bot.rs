use super::board::Board;
use super::types::{Player, Position};
use super::win_detector::LINES;

/// Fixed lookahead. The engine is intentionally shallow; deepening it
/// changes observable play.
pub const SEARCH_DEPTH: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Position>,
    pub score: i32,
}

/// Picks the computer's move for the current position. Returns `None`
/// only when the board has no empty cell left.
pub fn calculate_move(board: &mut Board) -> Option<Position> {
    minimax(board, SEARCH_DEPTH, Player::Computer).best_move
}

/// Plain depth-limited minimax, no pruning. Candidate marks are placed
/// directly on `board` and removed again before the next candidate, so
/// the board is back in its entry state when the call returns.
pub fn minimax(board: &mut Board, depth: u32, player: Player) -> SearchResult {
    let moves = board.available_moves();
    if moves.is_empty() || depth == 0 {
        return SearchResult {
            best_move: None,
            score: evaluate(board),
        };
    }

    let mut best_move = None;
    let mut best_score = match player {
        Player::Computer => i32::MIN,
        Player::Human => i32::MAX,
    };

    for mv in moves {
        board.place(mv, player.mark());
        let score = minimax(board, depth - 1, player.opponent()).score;
        board.clear(mv);

        let improves = match player {
            Player::Computer => score > best_score,
            Player::Human => score < best_score,
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
    }
}

/// Static score of the position from the computer's side: the sum of
/// the line scores over all 8 winning triples. A completed triple
/// shows up as ±100, which is all the magnitude the search needs; no
/// separate terminal check exists.
pub fn evaluate(board: &Board) -> i32 {
    LINES.iter().map(|line| evaluate_line(board, line)).sum()
}

/// Scores one triple: ±1 / ±10 / ±100 for one, two, three marks of a
/// single side, 0 for most mixed lines. The third-cell human branch
/// tests `score > 1` where the computer branch tests `score > 0`, so a
/// line holding one computer mark and a human mark in its last cell
/// scores -1 instead of 0.
fn evaluate_line(board: &Board, line: &[(usize, usize); 3]) -> i32 {
    let computer = Player::Computer.mark();
    let human = Player::Human.mark();

    let first = board.at(line[0].0, line[0].1);
    let second = board.at(line[1].0, line[1].1);
    let third = board.at(line[2].0, line[2].1);

    let mut score = 0;
    if first == computer {
        score = 1;
    } else if first == human {
        score = -1;
    }

    if second == computer {
        if score == 1 {
            score = 10;
        } else if score == -1 {
            return 0;
        } else {
            score = 1;
        }
    } else if second == human {
        if score == -1 {
            score = -10;
        } else if score == 1 {
            return 0;
        } else {
            score = -1;
        }
    }

    if third == computer {
        if score > 0 {
            score *= 10;
        } else if score < 0 {
            return 0;
        } else {
            score = 1;
        }
    } else if third == human {
        if score < 0 {
            score *= 10;
        } else if score > 1 {
            return 0;
        } else {
            score = -1;
        }
    }

    score
}

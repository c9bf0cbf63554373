use super::board::Board;
use super::types::Mark;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.at(row, col) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();

        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_detects_row_win() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::Empty, Mark::Empty, Mark::Empty],
            [Mark::X,     Mark::X,     Mark::X],
            [Mark::O,     Mark::O,     Mark::Empty],
        ]);

        assert!(check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_detects_column_win() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::O, Mark::X],
        ]);

        assert!(check_win(&board, Mark::O));
        assert!(!check_win(&board, Mark::X));
    }

    #[test]
    fn test_detects_diagonal_win() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::O, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);

        assert!(check_win(&board, Mark::X));
    }

    #[test]
    fn test_detects_anti_diagonal_win() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::X, Mark::X, Mark::O],
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::O, Mark::Empty, Mark::Empty],
        ]);

        assert!(check_win(&board, Mark::O));
    }

    #[test]
    fn test_scattered_marks_without_line() {
        // X at (0,0) and (1,1), O at (0,1): nobody has won and the
        // board is far from full.
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::X, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);

        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert!(!board.is_full());
    }

    #[test]
    fn test_full_board_without_winner() {
        #[rustfmt::skip]
        let board = Board::from_marks([
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::O, Mark::X],
            [Mark::X, Mark::X, Mark::O],
        ]);

        assert!(board.is_full());
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }
}

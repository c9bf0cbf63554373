use super::board::Board;
use super::types::{GameStatus, Player, Position};
use super::win_detector::check_win;

/// One game session: the grid plus whose turn it is and whether the
/// game already ended. The human moves first.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Human,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark. Rejections leave the board and
    /// the turn untouched.
    pub fn place_mark(&mut self, row: i32, col: i32) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.is_valid_move(row, col) {
            return Err(format!("Invalid move ({}, {})", row, col));
        }

        self.board
            .place(Position::new(row as usize, col as usize), self.current_player.mark());

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    // Win is checked before the draw so a board-filling winning move
    // still counts as a win.
    fn check_game_over(&mut self) {
        if check_win(&self.board, self.current_player.mark()) {
            self.status = match self.current_player {
                Player::Human => GameStatus::HumanWon,
                Player::Computer => GameStatus::ComputerWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::ComputerWon => Some(Player::Computer),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

mod board;
mod bot;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIZE};
pub use bot::{calculate_move, evaluate, minimax, SearchResult, SEARCH_DEPTH};
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Player, Position};
pub use win_detector::{check_win, LINES};

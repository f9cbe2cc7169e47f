mod board;
mod game_state;
mod input;
mod player;

pub use board::{Axis, Board, BoardError, BoardPosition, BoardPositionError, Cell, BOARD_SIZE};
pub use game_state::{GameState, MoveError, Outcome, WIN_LINES};
pub use input::{parse_move, validate_player_name, InputError};
pub use player::{Marker, Player, PlayerNum, Players};

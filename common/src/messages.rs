use crate::tictactoe::{BoardPosition, Marker, Outcome, PlayerNum};
use serde::{Deserialize, Serialize};

// Structured record of everything that happens during a session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum GameEvent {
    PlayerJoined {
        player_num: PlayerNum,
        name: String,
        marker: Marker,
    },
    NameRejected {
        reason: String,
    },
    MoveApplied {
        player_num: PlayerNum,
        position: BoardPosition,
    },
    MoveRejected {
        player_num: PlayerNum,
        input: String,
        reason: String,
    },
    GameEnd {
        outcome: Outcome,
        moves: usize,
    },
}

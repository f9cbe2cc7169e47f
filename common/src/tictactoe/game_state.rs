use crate::tictactoe::board::{Board, BoardError, BoardPosition};
use crate::tictactoe::player::{Player, PlayerNum, Players};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

const fn line(cells: [(usize, usize); 3]) -> [BoardPosition; 3] {
    [
        BoardPosition::from_raw(cells[0].0, cells[0].1),
        BoardPosition::from_raw(cells[1].0, cells[1].1),
        BoardPosition::from_raw(cells[2].0, cells[2].1),
    ]
}

pub const WIN_LINES: [[BoardPosition; 3]; 8] = [
    // Rows
    line([(0, 0), (0, 1), (0, 2)]),
    line([(1, 0), (1, 1), (1, 2)]),
    line([(2, 0), (2, 1), (2, 2)]),
    // Columns
    line([(0, 0), (1, 0), (2, 0)]),
    line([(0, 1), (1, 1), (2, 1)]),
    line([(0, 2), (1, 2), (2, 2)]),
    // Diagonals
    line([(0, 0), (1, 1), (2, 2)]),
    line([(0, 2), (1, 1), (2, 0)]),
];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerNum),
    Draw,
}

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("The game is already over")]
    GameOver,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameState {
    board: Board,
    players: Players,
    current: PlayerNum,
    outcome: Option<Outcome>,
}

impl GameState {
    // Player 1 moves first
    pub fn new(board: Board, players: Players) -> Self {
        GameState {
            board,
            players,
            current: PlayerNum::P1,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, player_num: PlayerNum) -> &Player {
        &self.players[player_num]
    }

    pub fn current(&self) -> PlayerNum {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // Moves are only ever appended once per cell, so matching against the
    // whole history is the same as matching against the board.
    pub fn check_win(player: &Player) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|p| player.moves().contains(p)))
    }

    // Returns the outcome if this move ended the game. A rejected move leaves
    // the turn with the same player.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn apply_move(&mut self, position: BoardPosition) -> Result<Option<Outcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let player = &mut self.players[self.current];
        self.board.mark_cell(position, player.marker())?;
        player.record_move(position);

        if Self::check_win(player) {
            self.outcome = Some(Outcome::Win(self.current));
        } else {
            match self.board.ensure_empty_cell() {
                Ok(()) => self.current = self.current.other(),
                Err(BoardError::NoEmptyCells) => self.outcome = Some(Outcome::Draw),
                Err(err) => return Err(err.into()),
            }
        }
        debug!("Outcome after move: {:?}", self.outcome);
        Ok(self.outcome)
    }
}

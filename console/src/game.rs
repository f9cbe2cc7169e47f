use crate::text;
use crate::util;
use common::messages::GameEvent;
use common::{
    parse_move, validate_player_name, Board, BoardError, BoardPosition, GameState, InputError,
    Marker, MoveError, Outcome, Player, PlayerNum, Players,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Console input closed before the game ended")]
    InputClosed,
    #[error("Move could not be applied: {0}")]
    Move(#[from] MoveError),
}

// One console session: asks for names, then runs turns until a win or a draw
pub struct Game<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Game { input, output }
    }

    #[instrument(skip(self), fields(session_id = %Uuid::new_v4()))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        let mut game_state = self.setup()?;
        self.play(&mut game_state)
    }

    pub fn setup(&mut self) -> Result<GameState, SessionError> {
        writeln!(self.output, "{}", text::BANNER)?;
        let p1 = Player::new(self.read_player_name(Marker::Cross)?, Marker::Cross);
        log_event(&GameEvent::PlayerJoined {
            player_num: PlayerNum::P1,
            name: p1.name().to_string(),
            marker: p1.marker(),
        });
        let p2 = Player::new(self.read_player_name(Marker::Nought)?, Marker::Nought);
        log_event(&GameEvent::PlayerJoined {
            player_num: PlayerNum::P2,
            name: p2.name().to_string(),
            marker: p2.marker(),
        });
        Ok(GameState::new(Board::default(), Players::new([p1, p2])))
    }

    pub fn read_player_name(&mut self, marker: Marker) -> Result<String, SessionError> {
        util::retry(|| -> Result<Result<String, InputError>, SessionError> {
            writeln!(self.output, "{}", text::name_instructions(marker.letter()))?;
            let line = self.read_line(text::NAME_PROMPT)?;
            let name = validate_player_name(&line);
            if let Err(err) = &name {
                writeln!(self.output, "{}", text::INVALID_NAME)?;
                log_event(&GameEvent::NameRejected {
                    reason: err.to_string(),
                });
            }
            Ok(name)
        })
    }

    pub fn play(&mut self, game_state: &mut GameState) -> Result<Outcome, SessionError> {
        loop {
            writeln!(self.output, "{}", game_state.board())?;
            let player_num = game_state.current();
            writeln!(
                self.output,
                "{}",
                text::your_turn(game_state.current_player().name())
            )?;

            let size = game_state.board().size();
            // Keep the typed line so rejections log what the player entered
            let (position, input) = util::retry(
                || -> Result<Result<(BoardPosition, String), InputError>, SessionError> {
                    let line = self.read_line(&text::move_prompt(size))?;
                    let input = line.trim().to_string();
                    match parse_move(&line, game_state.board()) {
                        Ok(position) => Ok(Ok((position, input))),
                        Err(err) => {
                            writeln!(self.output, "{}", text::invalid_move(size))?;
                            log_event(&GameEvent::MoveRejected {
                                player_num,
                                input,
                                reason: err.to_string(),
                            });
                            Ok(Err(err))
                        }
                    }
                },
            )?;

            match game_state.apply_move(position) {
                Ok(outcome) => {
                    log_event(&GameEvent::MoveApplied {
                        player_num,
                        position,
                    });
                    if let Some(outcome) = outcome {
                        self.announce(game_state, outcome)?;
                        return Ok(outcome);
                    }
                }
                Err(MoveError::Board(err @ BoardError::CellOccupied(_))) => {
                    writeln!(self.output, "{}", text::CELL_BUSY)?;
                    log_event(&GameEvent::MoveRejected {
                        player_num,
                        input,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    warn!("Unexpected move error: {}", err);
                    return Err(err.into());
                }
            }
        }
    }

    fn announce(&mut self, game_state: &GameState, outcome: Outcome) -> Result<(), SessionError> {
        writeln!(self.output, "{}", game_state.board())?;
        match outcome {
            Outcome::Win(player_num) => writeln!(
                self.output,
                "{}",
                text::winner(game_state.player(player_num).name())
            )?,
            Outcome::Draw => writeln!(self.output, "{}", text::DRAW)?,
        }
        let moves = game_state.player(PlayerNum::P1).moves().len()
            + game_state.player(PlayerNum::P2).moves().len();
        log_event(&GameEvent::GameEnd { outcome, moves });
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }
}

fn log_event(event: &GameEvent) {
    match serde_json::to_string(event) {
        Ok(json) => info!(event = %json, "game event"),
        Err(err) => warn!("Failed to serialize game event {:?}: {}", event, err),
    }
}

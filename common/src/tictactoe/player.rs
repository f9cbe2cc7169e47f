use crate::tictactoe::board::BoardPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn other(self) -> PlayerNum {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Marker {
    Cross,
    Nought,
}

impl Marker {
    // The letter players pick their side by
    pub fn letter(&self) -> char {
        match self {
            Marker::Cross => 'X',
            Marker::Nought => 'O',
        }
    }
}

// Both symbols are two columns wide, like an empty cell
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Cross => write!(f, "❎"),
            Marker::Nought => write!(f, "🔴"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    name: String,
    marker: Marker,
    moves: Vec<BoardPosition>,
}

impl Player {
    pub fn new(name: String, marker: Marker) -> Self {
        Player {
            name,
            marker,
            moves: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn moves(&self) -> &[BoardPosition] {
        &self.moves
    }

    pub fn record_move(&mut self, position: BoardPosition) {
        self.moves.push(position);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Players([Player; 2]);

impl Index<PlayerNum> for Players {
    type Output = Player;
    fn index(&self, index: PlayerNum) -> &Self::Output {
        match index {
            PlayerNum::P1 => &self.0[0],
            PlayerNum::P2 => &self.0[1],
        }
    }
}

impl IndexMut<PlayerNum> for Players {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        match index {
            PlayerNum::P1 => &mut self.0[0],
            PlayerNum::P2 => &mut self.0[1],
        }
    }
}

impl Players {
    pub fn new(players: [Player; 2]) -> Self {
        Players(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_move() {
        let mut player = Player::new("Alice".to_string(), Marker::Cross);
        assert!(player.moves().is_empty());
        player.record_move(BoardPosition::from_raw(0, 0));
        player.record_move(BoardPosition::from_raw(2, 1));
        assert_eq!(
            player.moves(),
            &[BoardPosition::from_raw(0, 0), BoardPosition::from_raw(2, 1)]
        );
    }

    #[test]
    fn test_players_index_by_identity() {
        // Same name and marker, still two distinct seats
        let mut players = Players::new([
            Player::new("Sam".to_string(), Marker::Cross),
            Player::new("Sam".to_string(), Marker::Cross),
        ]);
        players[PlayerNum::P2].record_move(BoardPosition::from_raw(1, 1));
        assert!(players[PlayerNum::P1].moves().is_empty());
        assert_eq!(players[PlayerNum::P2].moves().len(), 1);
        assert_eq!(PlayerNum::P1.other(), PlayerNum::P2);
        assert_eq!(PlayerNum::P2.other(), PlayerNum::P1);
    }

    #[test]
    fn test_display() {
        let player = Player::new("Олена".to_string(), Marker::Nought);
        assert_eq!(player.to_string(), "Олена");
        assert_eq!(Marker::Cross.to_string(), "❎");
        assert_eq!(Marker::Nought.letter(), 'O');
    }
}

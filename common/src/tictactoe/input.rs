use crate::tictactoe::board::{Board, BoardPosition};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Player name must not be empty")]
    InvalidPlayerName,
    #[error("Invalid move {input:?}: expected two numbers from 1 to {max} separated by a space")]
    InvalidMove { input: String, max: usize },
}

// Trimming happens here, so "  Bob " is stored as "Bob"
pub fn validate_player_name(raw: &str) -> Result<String, InputError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::InvalidPlayerName);
    }
    Ok(name.to_string())
}

// Parses a 1-based "row col" line into a 0-based position on the given board
pub fn parse_move(line: &str, board: &Board) -> Result<BoardPosition, InputError> {
    let invalid = || InputError::InvalidMove {
        input: line.trim().to_string(),
        max: board.size(),
    };
    let values = line
        .split_whitespace()
        .map(|token| token.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| invalid())?;
    match values[..] {
        [row, col] if (1..=board.size()).contains(&row) && (1..=board.size()).contains(&col) => {
            BoardPosition::new(board, row - 1, col - 1).map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_moves() {
        let board = Board::default();
        assert_eq!(parse_move("1 1", &board), Ok(BoardPosition::from_raw(0, 0)));
        assert_eq!(parse_move("3 3", &board), Ok(BoardPosition::from_raw(2, 2)));
        assert_eq!(parse_move("2 3\n", &board), Ok(BoardPosition::from_raw(1, 2)));
        assert_eq!(
            parse_move("  3\t1  ", &board),
            Ok(BoardPosition::from_raw(2, 0))
        );
    }

    #[test]
    fn test_parse_invalid_moves() {
        let board = Board::default();
        for line in ["0 1", "4 2", "a b", "1", "1 2 3", "", "   ", "-1 2", "1.0 2", "1,2"] {
            assert!(
                matches!(
                    parse_move(line, &board),
                    Err(InputError::InvalidMove { max: 3, .. })
                ),
                "{:?} should be rejected",
                line
            );
        }
    }

    #[test]
    fn test_parse_move_uses_board_size() {
        let board = Board::new(4);
        assert_eq!(parse_move("4 4", &board), Ok(BoardPosition::from_raw(3, 3)));
        assert!(parse_move("5 1", &board).is_err());
    }

    #[test]
    fn test_validate_player_name() {
        assert_eq!(validate_player_name("Alice"), Ok("Alice".to_string()));
        assert_eq!(validate_player_name("  Bob \n"), Ok("Bob".to_string()));
        assert_eq!(validate_player_name(""), Err(InputError::InvalidPlayerName));
        assert_eq!(validate_player_name(" \t\n"), Err(InputError::InvalidPlayerName));
    }
}

use crate::tictactoe::player::Marker;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug)]
pub enum BoardPositionError {
    #[error("{0} {1} exceeds board size {2}")]
    OutOfBounds(Axis, usize, usize),
}

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cell {0} is outside the board")]
    OutOfBounds(BoardPosition),
    #[error("Cell {0} is already occupied")]
    CellOccupied(BoardPosition),
    #[error("Board has no empty cells")]
    NoEmptyCells,
}

// 0-based (row, col)
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardPosition(usize, usize);

impl BoardPosition {
    pub fn new(board: &Board, row: usize, col: usize) -> Result<Self, BoardPositionError> {
        let size = board.size();
        if row >= size {
            return Err(BoardPositionError::OutOfBounds(Axis::Row, row, size));
        }
        if col >= size {
            return Err(BoardPositionError::OutOfBounds(Axis::Col, col, size));
        }
        Ok(BoardPosition(row, col))
    }

    // Only for positions known to fit the default board, such as the winning lines
    pub(crate) const fn from_raw(row: usize, col: usize) -> Self {
        BoardPosition(row, col)
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    position: BoardPosition,
    marker: Option<Marker>,
}

impl Cell {
    fn new(position: BoardPosition) -> Self {
        Cell {
            position,
            marker: None,
        }
    }

    pub fn position(&self) -> BoardPosition {
        self.position
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.marker {
            Some(marker) => write!(f, "{}", marker),
            None => write!(f, "  "),
        }
    }
}

// Rows of cells, indexed [row][col]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Board(Vec<Vec<Cell>>);

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Board(
            (0..size)
                .map(|row| {
                    (0..size)
                        .map(|col| Cell::new(BoardPosition(row, col)))
                        .collect()
                })
                .collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn cell(&self, position: BoardPosition) -> Option<&Cell> {
        self.0.get(position.row())?.get(position.col())
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter().flatten()
    }

    pub fn mark_cell(&mut self, position: BoardPosition, marker: Marker) -> Result<(), BoardError> {
        let cell = self
            .0
            .get_mut(position.row())
            .and_then(|row| row.get_mut(position.col()))
            .ok_or(BoardError::OutOfBounds(position))?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied(position));
        }
        cell.marker = Some(marker);
        Ok(())
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells().any(Cell::is_empty)
    }

    pub fn ensure_empty_cell(&self) -> Result<(), BoardError> {
        if self.has_empty_cell() {
            Ok(())
        } else {
            Err(BoardError::NoEmptyCells)
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

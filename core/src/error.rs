use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, CellIndex};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Cell index {index} is outside the board of {total} cells")]
    InvalidIndex { index: CellIndex, total: CellCount },
    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(#[from] SnapshotError),
}

/// Reasons a persisted snapshot can't be turned back into a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("missing field `{field}` on cell {position}")]
    MissingCellField {
        position: CellIndex,
        field: &'static str,
    },
    #[error("expected {expected} cells, found {actual}")]
    CellCountMismatch { expected: CellCount, actual: usize },
    #[error("cell at position {position} claims location {location}")]
    MisplacedCell { position: CellIndex, location: CellIndex },
    #[error("cell {0} has an adjacent count that disagrees with the mine layout")]
    AdjacencyMismatch(CellIndex),
    #[error("remaining count {0} does not match the board")]
    InconsistentRemaining(i32),
    #[error("malformed snapshot data: {0}")]
    Malformed(String),
}

pub type Result<T> = core::result::Result<T, GameError>;

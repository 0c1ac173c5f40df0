use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::engine::LOST;
use crate::*;

/// Persisted form of a single cell.
///
/// Every field is optional on the wire so a missing one is reported instead of defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotCell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<CellIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjacent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covering: Option<Covering>,
}

impl From<&Cell> for SnapshotCell {
    fn from(cell: &Cell) -> Self {
        Self {
            location: Some(cell.index()),
            is_mine: Some(cell.is_mine()),
            adjacent: Some(cell.adjacent_mine_count()),
            covering: Some(cell.covering()),
        }
    }
}

impl SnapshotCell {
    fn restore(&self, position: CellIndex) -> core::result::Result<Cell, SnapshotError> {
        let missing = |field| SnapshotError::MissingCellField { position, field };

        let location = self.location.ok_or_else(|| missing("location"))?;
        let is_mine = self.is_mine.ok_or_else(|| missing("isMine"))?;
        let adjacent = self.adjacent.ok_or_else(|| missing("adjacent"))?;
        let covering = self.covering.ok_or_else(|| missing("covering"))?;

        if location != position {
            return Err(SnapshotError::MisplacedCell { position, location });
        }
        Ok(Cell::restored(location, is_mine, adjacent, covering))
    }
}

/// Persisted form of a whole game: cells in row-major order plus the session counters.
///
/// The board size is not stored; it is supplied when restoring.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    #[serde(rename = "squares", skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<SnapshotCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_mode: Option<bool>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|err| SnapshotError::Malformed(err.to_string()).into())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| SnapshotError::Malformed(err.to_string()).into())
    }

    /// Rebuilds a game on a board of the given size, checking the snapshot is complete and
    /// internally consistent.
    pub fn restore(&self, size: Coord2) -> Result<GameState> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration("board must be at least 1x1"));
        }

        let snapshot_cells = self
            .cells
            .as_ref()
            .ok_or(SnapshotError::MissingField("squares"))?;
        let remaining = self
            .remaining
            .ok_or(SnapshotError::MissingField("remaining"))?;

        let expected = mult(width, height);
        if snapshot_cells.len() != usize::from(expected) {
            return Err(SnapshotError::CellCountMismatch {
                expected,
                actual: snapshot_cells.len(),
            }
            .into());
        }

        let cells = snapshot_cells
            .iter()
            .enumerate()
            .map(|(position, cell)| cell.restore(position))
            .collect::<core::result::Result<Vec<_>, _>>()?;
        let board = Board::from_cells(size, cells)?;

        check_adjacency(&board)?;
        check_remaining(&board, remaining)?;

        Ok(GameState::from_parts(
            board,
            remaining,
            self.flag_mode.unwrap_or_default(),
        ))
    }
}

fn check_adjacency(board: &Board) -> core::result::Result<(), SnapshotError> {
    match board
        .cells()
        .filter(|cell| !cell.is_mine())
        .find(|cell| cell.adjacent_mine_count() != board.count_adjacent_mines(cell.index()))
    {
        Some(cell) => Err(SnapshotError::AdjacencyMismatch(cell.index())),
        None => Ok(()),
    }
}

fn check_remaining(board: &Board, remaining: i32) -> core::result::Result<(), SnapshotError> {
    let consistent = if remaining == LOST {
        board.has_uncovered_mine()
    } else {
        !board.has_uncovered_mine() && remaining == i32::from(board.covered_safe_cells())
    };
    if consistent {
        Ok(())
    } else {
        Err(SnapshotError::InconsistentRemaining(remaining))
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: Some(self.board().cells().map(SnapshotCell::from).collect()),
            remaining: Some(self.remaining_safe_cells()),
            flag_mode: Some(self.flag_mode()),
        }
    }

    /// Restores a standard-size game.
    pub fn restore(snapshot: &Snapshot) -> Result<Self> {
        let game = snapshot.restore(GameConfig::STANDARD.size)?;
        log::debug!("Restored game, status {}", game.status());
        Ok(game)
    }

    /// Restores a standard-size game, falling back to a fresh one when the snapshot is unusable.
    #[cfg(feature = "std")]
    pub fn restore_or_new_game(snapshot: &Snapshot) -> Result<Self> {
        Self::restore(snapshot).or_else(|err| {
            log::warn!("Discarding saved game: {err}");
            Self::new_game()
        })
    }
}

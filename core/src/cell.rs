use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// Visibility of a cell. `Uncovered` is terminal, the other two toggle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Covering {
    #[default]
    Covered,
    Flagged,
    Uncovered,
}

impl Covering {
    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered)
    }

    /// Flips `Covered` and `Flagged`, leaves `Uncovered` alone.
    pub const fn toggled_flag(self) -> Self {
        match self {
            Self::Covered => Self::Flagged,
            Self::Flagged => Self::Covered,
            Self::Uncovered => Self::Uncovered,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    index: CellIndex,
    is_mine: bool,
    adjacent: u8,
    covering: Covering,
}

impl Cell {
    pub(crate) const fn new(index: CellIndex) -> Self {
        Self {
            index,
            is_mine: false,
            adjacent: 0,
            covering: Covering::Covered,
        }
    }

    pub(crate) const fn restored(
        index: CellIndex,
        is_mine: bool,
        adjacent: u8,
        covering: Covering,
    ) -> Self {
        Self {
            index,
            is_mine,
            adjacent,
            covering,
        }
    }

    pub const fn index(&self) -> CellIndex {
        self.index
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent
    }

    pub const fn covering(&self) -> Covering {
        self.covering
    }

    /// What a player is allowed to see of this cell.
    pub const fn view(&self) -> CellView {
        match (self.covering, self.is_mine) {
            (Covering::Covered, _) => CellView::Covered,
            (Covering::Flagged, _) => CellView::Flagged,
            (Covering::Uncovered, true) => CellView::Mine,
            (Covering::Uncovered, false) => CellView::Clear(self.adjacent),
        }
    }

    pub(crate) fn set_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn bump_adjacent(&mut self) {
        self.adjacent += 1;
    }

    pub(crate) fn set_covering(&mut self, covering: Covering) {
        self.covering = covering;
    }
}

/// Player-visible state of a cell, the only thing a renderer needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Covered,
    Flagged,
    Mine,
    Clear(u8),
}

impl CellView {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged)
    }
}

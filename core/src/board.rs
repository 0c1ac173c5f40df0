use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Row-major grid of cells, stored as `(row, column)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// A board of the given size with no mines and every cell covered.
    pub fn empty((width, height): Coord2) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration("board must be at least 1x1"));
        }
        let width = usize::from(width);
        let cells = Array2::from_shape_fn((usize::from(height), width), |(row, column)| {
            Cell::new(row * width + column)
        });
        Ok(Self {
            cells,
            mine_count: 0,
        })
    }

    /// Places mines at the given indices, computing adjacency the same way generation does.
    pub fn from_mine_indices(size: Coord2, mines: &[CellIndex]) -> Result<Self> {
        let mut board = Self::empty(size)?;
        if mines.len() >= usize::from(board.total_cells()) {
            return Err(GameError::InvalidConfiguration(
                "mine count must be less than the number of cells",
            ));
        }
        for &index in mines {
            let index = board
                .validate_index(index)
                .map_err(|_| GameError::InvalidConfiguration("mine index outside the board"))?;
            if !board.place_mine(index) {
                return Err(GameError::InvalidConfiguration("duplicate mine index"));
            }
        }
        Ok(board)
    }

    /// Rebuilds a board from cells already in row-major order.
    pub(crate) fn from_cells(size: Coord2, cells: Vec<Cell>) -> Result<Self> {
        let (width, height) = size;
        let mine_count = cells.iter().filter(|cell| cell.is_mine()).count();
        let cells = Array2::from_shape_vec((usize::from(height), usize::from(width)), cells)
            .map_err(|err| SnapshotError::Malformed(alloc::format!("{err}")))?;
        Ok(Self {
            cells,
            // bounded by the cell count, which is a CellCount
            mine_count: mine_count as CellCount,
        })
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (columns as Coord, rows as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        let total = self.total_cells();
        if index < usize::from(total) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex { index, total })
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(self.position(index)?)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(index, self.size())
    }

    /// Counts mines around `index` by scanning its neighbors.
    pub fn count_adjacent_mines(&self, index: CellIndex) -> u8 {
        self.iter_neighbors(index)
            .filter(|&neighbor| self[neighbor].is_mine())
            .count() as u8
    }

    /// Safe cells that are still covered or flagged.
    pub fn covered_safe_cells(&self) -> CellCount {
        self.cells()
            .filter(|cell| !cell.is_mine() && !cell.covering().is_uncovered())
            .count() as CellCount
    }

    pub fn has_uncovered_mine(&self) -> bool {
        self.cells()
            .any(|cell| cell.is_mine() && cell.covering().is_uncovered())
    }

    /// Marks a mine and bumps the count of every non-mine neighbor.
    ///
    /// Returns `false` without changing anything if the cell already holds a mine.
    pub(crate) fn place_mine(&mut self, index: CellIndex) -> bool {
        let cell = self.cell_mut(index);
        if cell.is_mine() {
            return false;
        }
        cell.set_mine();
        self.mine_count += 1;

        for neighbor in self.iter_neighbors(index) {
            let cell = self.cell_mut(neighbor);
            if !cell.is_mine() {
                cell.bump_adjacent();
            }
        }
        true
    }

    /// Uncovers `index` and floods outward through blank cells, returning how many cells were uncovered.
    ///
    /// Anything not `Covered` is left alone and contributes nothing, so calling this on an
    /// already uncovered or flagged cell returns 0. Only call it on cells known to be safe.
    pub fn reveal(&mut self, index: CellIndex) -> CellCount {
        let size = self.size();
        let mut uncovered = 0;
        let mut pending = vec![index];

        while let Some(next) = pending.pop() {
            let cell = self.cell_mut(next);
            if cell.covering() != Covering::Covered {
                continue;
            }
            cell.set_covering(Covering::Uncovered);
            uncovered += 1;

            if cell.adjacent_mine_count() == 0 && !cell.is_mine() {
                pending.extend(NeighborIter::new(next, size));
            }
        }

        uncovered
    }

    pub(crate) fn set_covering(&mut self, index: CellIndex, covering: Covering) {
        self.cell_mut(index).set_covering(covering);
    }

    fn position(&self, index: CellIndex) -> Option<(usize, usize)> {
        let (rows, columns) = self.cells.dim();
        (index < rows * columns).then(|| (index / columns, index % columns))
    }

    fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let columns = self.cells.ncols();
        &mut self.cells[(index / columns, index % columns)]
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let columns = self.cells.ncols();
        &self.cells[(index / columns, index % columns)]
    }
}

/// Single coordinate axis used for board width and height.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Row-major position of a cell, `0 <= index < width * height`.
pub type CellIndex = usize;

/// Board dimensions `(width, height)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Neighbor slots in row-major order around the center: top row, then left and right, then bottom row.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Edges {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl Edges {
    fn of(index: CellIndex, width: usize, height: usize) -> Self {
        let column = index % width;
        Self {
            left: column == 0,
            right: column == width - 1,
            top: index < width,
            bottom: index >= width * (height - 1),
        }
    }

    fn allows(self, (dx, dy): (isize, isize)) -> bool {
        !((dx < 0 && self.left)
            || (dx > 0 && self.right)
            || (dy < 0 && self.top)
            || (dy > 0 && self.bottom))
    }
}

/// Lazily yields the up to 8 in-bounds neighbors of a cell, without wraparound.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: CellIndex,
    width: usize,
    edges: Edges,
    slot: u8,
}

impl NeighborIter {
    /// `size` must be non-empty and `center` must lie inside it.
    pub fn new(center: CellIndex, (width, height): Coord2) -> Self {
        let width = usize::from(width);
        let height = usize::from(height);
        debug_assert!(width > 0 && height > 0);
        debug_assert!(center < width * height);
        Self {
            center,
            width,
            edges: Edges::of(center, width, height),
            slot: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.slot)) {
            self.slot += 1;
            if self.edges.allows(delta) {
                let (dx, dy) = delta;
                let offset = dy * self.width as isize + dx;
                return Some(self.center.wrapping_add_signed(offset));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.slot)))
    }
}

impl core::iter::FusedIterator for NeighborIter {}

/// Applies `visit` to every neighbor of `index` on a grid of the given size.
pub fn for_each_neighbor(index: CellIndex, size: Coord2, visit: impl FnMut(CellIndex)) {
    NeighborIter::new(index, size).for_each(visit);
}

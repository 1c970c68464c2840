use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Cells a generator keeps free of mines around the first opened cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafeZone {
    /// Only the opened cell itself.
    Cell,
    /// The opened cell and its up-to-8 neighbors.
    #[default]
    Neighborhood,
}

impl SafeZone {
    pub fn contains(self, start: Coord2, coords: Coord2) -> bool {
        match self {
            Self::Cell => start == coords,
            Self::Neighborhood => is_within_one(start, coords),
        }
    }
}

/// Mine positions for a whole board, produced by a [`MinefieldGenerator`].
///
/// Starts empty and only ever gains mines or moves them, so `mine_count` always matches the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    size: Coord2,
    mines: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(size: Coord2) -> Self {
        Self {
            size,
            mines: Array2::default(size.grid_index()),
            mine_count: 0,
        }
    }

    /// Puts a mine at `coords`, returning `false` if one was already there.
    pub fn insert(&mut self, coords: Coord2) -> Result<bool> {
        let coords = coords.into_coords(self.size).ok_or(GameError::OutOfBounds)?;
        let slot = &mut self.mines[coords.grid_index()];
        if *slot {
            return Ok(false);
        }
        *slot = true;
        self.mine_count += 1;
        Ok(true)
    }

    /// Exchanges the contents of two in-bounds cells.
    pub(crate) fn swap(&mut self, a: Coord2, b: Coord2) {
        self.mines.swap(a.grid_index(), b.grid_index());
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        coords
            .into_coords(self.size)
            .is_some_and(|coords| self.mines[coords.grid_index()])
    }
}

/// Places mines exactly where it is told to, for replays and deterministic setups.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut layout = MineLayout::empty(config.size);
        for coords in self.mines {
            if !layout.insert(coords)? {
                log::trace!("Duplicate mine at {:?} ignored", coords);
            }
        }
        Ok(layout)
    }
}

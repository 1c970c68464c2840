#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod config;
mod error;
mod game;
mod generator;
mod types;
mod view;

/// Result of a reveal or chord reveal on a [`Board`].
///
/// Hitting a mine is an expected end of a round, so it is kept apart from
/// [`GameError`], which only reports bad input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A mine was revealed, the round is lost.
    MineHit,
    /// Number of cells that went from hidden to revealed.
    Revealed(CellCount),
}

impl RevealOutcome {
    pub const fn is_mine_hit(self) -> bool {
        matches!(self, Self::MineHit)
    }

    pub const fn revealed_count(self) -> CellCount {
        match self {
            Self::MineHit => 0,
            Self::Revealed(count) => count,
        }
    }

    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Revealed(0))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }

    /// Change to apply to a remaining-mines counter.
    pub const fn mines_left_delta(self) -> isize {
        match self {
            Self::NoChange => 0,
            Self::Flagged => -1,
            Self::Unflagged => 1,
        }
    }
}

/// Outcome of opening a cell in a [`Game`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Safe(CellCount),
    Explode,
    Win,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Safe(_) => true,
            Self::Explode => true,
            Self::Win => true,
        }
    }
}

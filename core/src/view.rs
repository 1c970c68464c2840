use serde::{Deserialize, Serialize};

use crate::*;

/// What a frontend should draw for a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Open(u8),
    // these are only used to show result after the game finishes:
    Exploded,
    Mine,
    IncorrectFlag,
}

impl CellView {
    /// View of a cell while the game is still running.
    pub const fn playing(cell: Cell) -> Self {
        match cell.state {
            CellState::Hidden => Self::Hidden,
            CellState::Flagged => Self::Flagged,
            CellState::Revealed if cell.is_mine => Self::Exploded,
            CellState::Revealed => Self::Open(cell.adjacent_mines),
        }
    }

    /// View of a cell once the game is over, showing where the mines were.
    pub const fn finished(cell: Cell, won: bool) -> Self {
        match (cell.state, cell.is_mine) {
            (CellState::Hidden, true) if won => Self::Flagged,
            (CellState::Hidden, true) => Self::Mine,
            (CellState::Flagged, false) => Self::IncorrectFlag,
            _ => Self::playing(cell),
        }
    }

    /// Whether the cell is visually closed.
    pub const fn is_closed(self) -> bool {
        match self {
            Self::Hidden => true,
            Self::Flagged => true,
            Self::Open(_) => false,
            Self::Exploded => false,
            Self::Mine => false,
            Self::IncorrectFlag => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(is_mine: bool, adjacent_mines: u8, state: CellState) -> Cell {
        Cell {
            is_mine,
            adjacent_mines,
            state,
        }
    }

    #[test]
    fn playing_view_hides_mines() {
        assert_eq!(CellView::playing(cell(true, 0, CellState::Hidden)), CellView::Hidden);
        assert_eq!(
            CellView::playing(cell(false, 3, CellState::Revealed)),
            CellView::Open(3)
        );
        assert_eq!(
            CellView::playing(cell(true, 0, CellState::Revealed)),
            CellView::Exploded
        );
    }

    #[test]
    fn lost_view_shows_mines_and_wrong_flags() {
        assert_eq!(
            CellView::finished(cell(true, 0, CellState::Hidden), false),
            CellView::Mine
        );
        assert_eq!(
            CellView::finished(cell(false, 1, CellState::Flagged), false),
            CellView::IncorrectFlag
        );
        assert_eq!(
            CellView::finished(cell(true, 0, CellState::Flagged), false),
            CellView::Flagged
        );
        assert_eq!(
            CellView::finished(cell(false, 2, CellState::Hidden), false),
            CellView::Hidden
        );
    }

    #[test]
    fn won_view_flags_remaining_mines() {
        let view = CellView::finished(cell(true, 0, CellState::Hidden), true);

        assert_eq!(view, CellView::Flagged);
        assert!(view.is_closed());
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest side length accepted for a custom board.
pub const MIN_CUSTOM_SIDE: Coord = 5;

/// Largest side length accepted for a custom board.
pub const MAX_CUSTOM_SIDE: Coord = 10;

/// Upper bound on custom mine counts, reached by a full-size custom board.
pub const MAX_CUSTOM_MINES: CellCount = 50;

/// Board size `(rows, cols)` and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks the bounds every board needs: positive sides and at least one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines >= cell_total(size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Checks the tighter bounds offered to players for custom boards.
    pub fn custom(size: Coord2, mines: CellCount) -> Result<Self> {
        let side_range = MIN_CUSTOM_SIDE..=MAX_CUSTOM_SIDE;
        if !side_range.contains(&size.0) || !side_range.contains(&size.1) {
            return Err(GameError::InvalidDimensions);
        }
        let max_mines = (cell_total(size) / 2).min(MAX_CUSTOM_MINES);
        if mines == 0 || mines > max_mines {
            return Err(GameError::TooManyMines);
        }
        Self::new(size, mines)
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::Intermediate.config()
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Expert,
    Custom(GameConfig),
}

impl Difficulty {
    pub const BEGINNER: GameConfig = GameConfig::new_unchecked((5, 5), 5);
    pub const INTERMEDIATE: GameConfig = GameConfig::new_unchecked((8, 8), 15);
    pub const EXPERT: GameConfig = GameConfig::new_unchecked((10, 10), 30);

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => Self::BEGINNER,
            Self::Intermediate => Self::INTERMEDIATE,
            Self::Expert => Self::EXPERT,
            Self::Custom(config) => config,
        }
    }

    /// Builds a validated custom difficulty.
    pub fn custom(size: Coord2, mines: CellCount) -> Result<Self> {
        GameConfig::custom(size, mines).map(Self::Custom)
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_the_classic_levels() {
        assert_eq!(Difficulty::Beginner.config(), GameConfig::new((5, 5), 5).unwrap());
        assert_eq!(Difficulty::Intermediate.config().safe_cells(), 64 - 15);
        assert_eq!(Difficulty::Expert.config().total_cells(), 100);
        assert_eq!(GameConfig::default(), Difficulty::INTERMEDIATE);
    }

    #[test]
    fn new_rejects_empty_sides_and_full_boards() {
        assert_eq!(GameConfig::new((0, 4), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 0), 0), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((3, 3), 9), Err(GameError::TooManyMines));
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((1, 1), 0).is_ok());
    }

    #[test]
    fn custom_limits_follow_the_custom_dialog() {
        assert!(Difficulty::custom((10, 10), 50).is_ok());
        assert_eq!(
            Difficulty::custom((10, 10), 51),
            Err(GameError::TooManyMines)
        );
        assert_eq!(Difficulty::custom((5, 5), 13), Err(GameError::TooManyMines));
        assert!(Difficulty::custom((5, 5), 12).is_ok());
        assert_eq!(Difficulty::custom((5, 5), 0), Err(GameError::TooManyMines));
        assert_eq!(
            Difficulty::custom((11, 5), 1),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            Difficulty::custom((4, 5), 1),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn difficulty_round_trips_through_json() {
        let difficulty = Difficulty::custom((6, 9), 20).unwrap();

        let json = serde_json::to_string(&difficulty).unwrap();
        let decoded: Difficulty = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, difficulty);
        assert_eq!(decoded.config().size, (6, 9));
    }
}

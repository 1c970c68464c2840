use alloc::collections::VecDeque;
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of cells plus the bookkeeping needed to answer queries without rescanning it.
///
/// Mines are placed lazily: a fresh board has none until [`Board::place_mines`] runs with the first opened cell, so
/// that cell and its neighbors can be kept clear.
///
/// Deserialized boards are checked for a consistent shape and mine count. Adjacency numbers and the cleared and
/// flagged counters are rebuilt from the cells rather than trusted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    initialized: bool,
    cleared_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
}

#[derive(Deserialize)]
struct BoardSnapshot {
    cells: Array2<Cell>,
    mine_count: CellCount,
    initialized: bool,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let (rows, cols) = snapshot.cells.dim();
        let size: Coord2 = match (rows.try_into(), cols.try_into()) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => return Err(GameError::InvalidDimensions),
        };
        GameConfig::new(size, snapshot.mine_count)?;

        let mines = snapshot.cells.iter().filter(|cell| cell.is_mine).count();
        if snapshot.initialized && mines != usize::from(snapshot.mine_count) {
            return Err(GameError::MineCountMismatch);
        }
        if !snapshot.initialized && snapshot.cells.iter().any(|cell| cell.is_mine || cell.is_revealed()) {
            return Err(GameError::InvalidBoardShape);
        }
        if let Some(coords) = snapshot.triggered_mine {
            let coords = coords.into_coords(size).ok_or(GameError::OutOfBounds)?;
            let cell = snapshot.cells[coords.grid_index()];
            if !(cell.is_mine && cell.is_revealed()) {
                return Err(GameError::InvalidBoardShape);
            }
        }

        let mut board = Self {
            cells: snapshot.cells,
            mine_count: snapshot.mine_count,
            initialized: snapshot.initialized,
            cleared_count: 0,
            flagged_count: 0,
            triggered_mine: snapshot.triggered_mine,
        };
        for cell in board.cells.iter_mut() {
            cell.adjacent_mines = 0;
            if cell.is_revealed() && !cell.is_mine {
                board.cleared_count += 1;
            }
            if cell.is_flagged() {
                board.flagged_count += 1;
            }
        }
        board.compute_adjacency();

        log::debug!(
            "Board {:?} restored, {} cleared, {} flagged",
            size,
            board.cleared_count,
            board.flagged_count
        );
        Ok(board)
    }
}

impl Board {
    pub fn new(rows: Coord, cols: Coord, mine_count: CellCount) -> Result<Self> {
        Self::from_config(GameConfig::new_unchecked((rows, cols), mine_count))
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        Ok(Self {
            cells: Array2::default(config.size.grid_index()),
            mine_count: config.mines,
            initialized: false,
            cleared_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows.try_into().unwrap(), cols.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of non-mine cells currently revealed.
    pub fn cleared_count(&self) -> CellCount {
        self.cleared_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Number of revealed cells that clears the board.
    pub fn safe_cell_count(&self) -> CellCount {
        self.config().safe_cells()
    }

    pub fn is_cleared(&self) -> bool {
        self.initialized && self.cleared_count == self.safe_cell_count()
    }

    /// First mine revealed since placement, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: impl IntoCoords) -> Result<Coord2> {
        coords
            .into_coords(self.size())
            .ok_or(GameError::OutOfBounds)
    }

    pub fn cell(&self, coords: impl IntoCoords) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.grid_index()])
    }

    pub fn cell_state(&self, coords: impl IntoCoords) -> Result<CellState> {
        self.cell(coords).map(Cell::state)
    }

    pub fn is_mine(&self, coords: impl IntoCoords) -> Result<bool> {
        self.cell(coords).map(Cell::is_mine)
    }

    pub fn adjacent_count(&self, coords: impl IntoCoords) -> Result<u8> {
        self.cell(coords).map(Cell::adjacent_mines)
    }

    pub fn flagged_neighbors(&self, coords: impl IntoCoords) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_flagged_neighbors(coords))
    }

    /// Whether `coords` is a revealed number with exactly that many flags around it.
    pub fn is_satisfied(&self, coords: impl IntoCoords) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.grid_index()];
        Ok(cell.is_revealed()
            && !cell.is_mine
            && cell.adjacent_mines > 0
            && cell.adjacent_mines == self.count_flagged_neighbors(coords))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Places mines with the default shuffle, keeping `avoid` and its neighbors clear.
    pub fn place_mines(&mut self, avoid: impl IntoCoords, seed: u64) -> Result<()> {
        let avoid = self.validate_coords(avoid)?;
        self.place_mines_with(ShuffleMinefieldGenerator::new(seed, avoid))
    }

    pub fn place_mines_with(&mut self, generator: impl MinefieldGenerator) -> Result<()> {
        if self.initialized {
            return Err(GameError::AlreadyInitialized);
        }

        let layout = generator.generate(self.config())?;
        if layout.size() != self.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if layout.mine_count() != self.mine_count {
            return Err(GameError::MineCountMismatch);
        }

        Zip::from(&mut self.cells)
            .and(layout.mine_mask())
            .for_each(|cell, &is_mine| cell.is_mine = is_mine);
        self.compute_adjacency();
        self.initialized = true;

        log::debug!(
            "Board {:?} initialized with {} mines",
            self.size(),
            self.mine_count
        );
        Ok(())
    }

    /// Reveals a hidden cell, flood-filling from it when it has no adjacent mines.
    pub fn reveal(&mut self, coords: impl IntoCoords) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        let cell = self.cells[coords.grid_index()];
        Ok(match cell.state {
            CellState::Revealed | CellState::Flagged => RevealOutcome::Revealed(0),
            CellState::Hidden if cell.is_mine => {
                self.detonate(coords);
                RevealOutcome::MineHit
            }
            CellState::Hidden => RevealOutcome::Revealed(self.open_cell(coords)),
        })
    }

    /// Reveals every hidden, unflagged neighbor of `coords`.
    ///
    /// Callers decide whether the number at `coords` is satisfied (see [`Board::is_satisfied`]); this runs
    /// unconditionally. Stops at the first mine, keeping whatever it already revealed.
    pub fn chord_reveal(&mut self, coords: impl IntoCoords) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        log::debug!(
            "Chord reveal at {:?} with {} flagged neighbors",
            coords,
            self.count_flagged_neighbors(coords)
        );

        let mut cleared = 0;
        for neighbor in neighbors(coords, self.size()) {
            let cell = self.cells[neighbor.grid_index()];
            if !cell.is_hidden() {
                continue;
            }
            if cell.is_mine {
                self.detonate(neighbor);
                return Ok(RevealOutcome::MineHit);
            }
            cleared += self.open_cell(neighbor);
        }

        Ok(RevealOutcome::Revealed(cleared))
    }

    /// Flips a cell between hidden and flagged, returning whether it is flagged now.
    ///
    /// Revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: impl IntoCoords) -> Result<bool> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self.cells[coords.grid_index()];
        Ok(match cell.state {
            CellState::Revealed => false,
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                self.flagged_count += 1;
                true
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                self.flagged_count -= 1;
                false
            }
        })
    }

    /// Clears mines, counts, and player marks, keeping size and mine count.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.initialized = false;
        self.cleared_count = 0;
        self.flagged_count = 0;
        self.triggered_mine = None;
    }

    fn compute_adjacency(&mut self) {
        let size = self.size();
        let (rows, cols) = size;

        for row in 0..rows {
            for col in 0..cols {
                if !self.cells[(row, col).grid_index()].is_mine {
                    continue;
                }
                for neighbor in neighbors((row, col), size) {
                    let cell = &mut self.cells[neighbor.grid_index()];
                    if !cell.is_mine {
                        cell.adjacent_mines += 1;
                    }
                }
            }
        }
    }

    /// Opens a hidden non-mine cell and returns how many cells it revealed in total.
    fn open_cell(&mut self, coords: Coord2) -> CellCount {
        let adjacent_mines = self.mark_revealed(coords);
        log::debug!(
            "Open cell at {:?}, adjacent mines: {}",
            coords,
            adjacent_mines
        );

        if adjacent_mines == 0 {
            1 + self.flood_fill(coords)
        } else {
            1
        }
    }

    /// Breadth-first expansion from an already revealed zero cell.
    ///
    /// A cell is revealed before it is queued, so none is queued twice.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let size = self.size();
        let mut revealed = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for neighbor in neighbors(visit_coords, size) {
                let cell = self.cells[neighbor.grid_index()];
                // flags stop the fill just like revealed cells
                if cell.is_mine || !cell.is_hidden() {
                    continue;
                }

                let adjacent_mines = self.mark_revealed(neighbor);
                revealed += 1;
                log::trace!(
                    "Flood opened cell at {:?}, adjacent mines: {}",
                    neighbor,
                    adjacent_mines
                );

                if adjacent_mines == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        revealed
    }

    fn mark_revealed(&mut self, coords: Coord2) -> u8 {
        let cell = &mut self.cells[coords.grid_index()];
        cell.state = CellState::Revealed;
        self.cleared_count += 1;
        cell.adjacent_mines
    }

    fn detonate(&mut self, coords: Coord2) {
        self.cells[coords.grid_index()].state = CellState::Revealed;
        self.triggered_mine.get_or_insert(coords);
        log::debug!("Mine hit at {:?}", coords);
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self.cells[pos.grid_index()].is_flagged())
            .count()
            .try_into()
            .unwrap()
    }

    fn check_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(GameError::NotInitialized)
        }
    }
}

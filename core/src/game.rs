use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won
/// - NotStarted -> Lost
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Initial state
    #[default]
    NotStarted,
    /// Game started
    InProgress,
    /// Game ended and player won
    Won,
    /// Game ended and player lost
    Lost,
}

impl GameState {
    /// Indicates the game has not started yet
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One round of play on a single owned [`Board`].
///
/// Mines are placed on the first open, using the seed the game was created or reset with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct Game {
    board: Board,
    seed: u64,
    state: GameState,
}

#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    seed: u64,
    state: GameState,
}

impl TryFrom<GameSnapshot> for Game {
    type Error = GameError;

    fn try_from(GameSnapshot { board, seed, state }: GameSnapshot) -> Result<Self> {
        let consistent = match state {
            GameState::NotStarted => board.cleared_count() == 0 && board.triggered_mine().is_none(),
            // flagging before the first open also starts a game
            GameState::InProgress => !board.is_cleared() && board.triggered_mine().is_none(),
            GameState::Won => board.is_cleared() && board.triggered_mine().is_none(),
            GameState::Lost => board.triggered_mine().is_some(),
        };
        if !consistent {
            return Err(GameError::StateMismatch);
        }
        Ok(Self { board, seed, state })
    }
}

impl Game {
    pub fn new(config: impl Into<GameConfig>, seed: u64) -> Result<Self> {
        Ok(Self {
            board: Board::from_config(config.into())?,
            seed,
            state: Default::default(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn ended(&self) -> bool {
        self.state.is_final()
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only access for frontends that want the raw simulation state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flagged_count() as isize)
    }

    pub fn cleared_count(&self) -> CellCount {
        self.board.cleared_count()
    }

    pub fn cell_view(&self, coords: impl IntoCoords) -> Result<CellView> {
        let cell = self.board.cell(coords)?;
        Ok(match self.state {
            GameState::Won => CellView::finished(cell, true),
            GameState::Lost => CellView::finished(cell, false),
            GameState::NotStarted | GameState::InProgress => CellView::playing(cell),
        })
    }

    /// Opens a cell the way a primary click does.
    ///
    /// A hidden cell is revealed. A revealed number with as many flags around it is chord revealed. Anything else is
    /// left alone.
    pub fn open(&mut self, coords: impl IntoCoords) -> Result<OpenOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_final()?;

        let cell = self.board.cell(coords)?;
        if cell.is_flagged() {
            return Ok(OpenOutcome::NoChange);
        }

        if !self.board.is_initialized() {
            self.board.place_mines(coords, self.seed)?;
        }
        self.mark_start();

        let reveal = if self.board.is_satisfied(coords)? {
            self.board.chord_reveal(coords)?
        } else if cell.is_hidden() {
            self.board.reveal(coords)?
        } else {
            return Ok(OpenOutcome::NoChange);
        };

        Ok(match reveal {
            RevealOutcome::MineHit => {
                self.mark_ended(false);
                OpenOutcome::Explode
            }
            RevealOutcome::Revealed(_) if self.board.is_cleared() => {
                self.mark_ended(true);
                OpenOutcome::Win
            }
            RevealOutcome::Revealed(0) => OpenOutcome::NoChange,
            RevealOutcome::Revealed(count) => OpenOutcome::Safe(count),
        })
    }

    /// Flags or unflags a cell the way a secondary click does.
    pub fn toggle_flag(&mut self, coords: impl IntoCoords) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_final()?;
        self.mark_start();

        let was_revealed = self.board.cell(coords)?.is_revealed();
        let flagged = self.board.toggle_flag(coords)?;
        Ok(match (was_revealed, flagged) {
            (true, _) => FlagOutcome::NoChange,
            (false, true) => FlagOutcome::Flagged,
            (false, false) => FlagOutcome::Unflagged,
        })
    }

    /// Starts a new round with the same board size and mine count.
    pub fn reset(&mut self, seed: u64) {
        self.board.reset();
        self.seed = seed;
        self.state = GameState::NotStarted;
        log::debug!("Game reset with seed {}", seed);
    }

    /// Starts a new round on a board built for `config`, e.g. after picking another difficulty.
    pub fn reconfigure(&mut self, config: impl Into<GameConfig>, seed: u64) -> Result<()> {
        *self = Self::new(config, seed)?;
        Ok(())
    }

    fn check_final(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn mark_start(&mut self) {
        if self.state.is_initial() {
            self.state = GameState::InProgress;
        }
    }

    fn mark_ended(&mut self, won: bool) {
        if self.state.is_final() {
            return;
        }
        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!(
            "Game {} with {} of {} cells cleared",
            if won { "won" } else { "lost" },
            self.board.cleared_count(),
            self.board.safe_cell_count()
        );
    }
}

use core::fmt;

use crate::*;

/// Progress of a game, derived from the remaining safe cell counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress(CellCount),
    Won,
    Lost,
}

impl Status {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(remaining) => write!(f, "{remaining}"),
            Self::Won => f.write_str("None... you win!"),
            Self::Lost => f.write_str("Boom... you lose!"),
        }
    }
}

/// What a single action did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    FlagToggled(Covering),
    Revealed(CellCount),
    Exploded,
    Won,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Remaining-count sentinel for a lost game.
pub(crate) const LOST: i32 = -1;

/// A game in play: the board, how many safe cells are left and whether taps place flags.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    board: Board,
    remaining: i32,
    flag_mode: bool,
}

impl GameState {
    /// Starts a game on a freshly generated board.
    pub fn new(board: Board) -> Self {
        let remaining = i32::from(board.covered_safe_cells());
        Self {
            board,
            remaining,
            flag_mode: false,
        }
    }

    /// Standard 10x10 game with 15 mines, seeded from the clock.
    #[cfg(feature = "std")]
    pub fn new_game() -> Result<Self> {
        let seed = web_time::SystemTime::now()
            .duration_since(web_time::SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new_game_with(GameConfig::STANDARD, seed)
    }

    pub fn new_game_with(config: GameConfig, seed: u64) -> Result<Self> {
        let board = RandomMinefieldGenerator::new(seed).generate(config)?;
        log::debug!("New game with seed {seed}");
        Ok(Self::new(board))
    }

    /// Used by snapshot restore, which has already checked consistency.
    pub(crate) fn from_parts(board: Board, remaining: i32, flag_mode: bool) -> Self {
        Self {
            board,
            remaining,
            flag_mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Safe cells still to uncover, `0` once won and `-1` once lost.
    pub fn remaining_safe_cells(&self) -> i32 {
        self.remaining
    }

    pub fn status(&self) -> Status {
        match self.remaining {
            LOST => Status::Lost,
            0 => Status::Won,
            // never negative other than the loss sentinel and never above the cell count
            remaining => Status::InProgress(remaining as CellCount),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn flag_mode(&self) -> bool {
        self.flag_mode
    }

    pub fn set_flag_mode(&mut self, enabled: bool) {
        self.flag_mode = enabled;
    }

    pub fn cell_view(&self, index: CellIndex) -> Result<CellView> {
        let index = self.board.validate_index(index)?;
        Ok(self.board[index].view())
    }

    /// Applies a tap using the game's own flag mode.
    pub fn tap(&mut self, index: CellIndex) -> Result<ActionOutcome> {
        self.apply_action(index, self.flag_mode)
    }

    /// Applies a tap on `index`, either toggling a flag or uncovering the cell.
    ///
    /// Finished games ignore every action. Flagged cells can only be unflagged, never
    /// uncovered directly.
    pub fn apply_action(&mut self, index: CellIndex, flag_mode: bool) -> Result<ActionOutcome> {
        use ActionOutcome::*;

        let index = self.board.validate_index(index)?;
        if self.remaining <= 0 {
            return Ok(NoChange);
        }

        let cell = self.board[index];
        log::trace!("Action on cell {index} (flag mode {flag_mode}): {:?}", cell.covering());

        let outcome = match cell.covering() {
            Covering::Uncovered if flag_mode => NoChange,
            covering @ (Covering::Covered | Covering::Flagged) if flag_mode => {
                let toggled = covering.toggled_flag();
                self.board.set_covering(index, toggled);
                FlagToggled(toggled)
            }
            Covering::Flagged => NoChange,
            _ if cell.is_mine() => {
                self.board.set_covering(index, Covering::Uncovered);
                self.remaining = LOST;
                log::debug!("Mine hit at cell {index}");
                Exploded
            }
            _ => {
                let uncovered = self.board.reveal(index);
                self.remaining -= i32::from(uncovered);
                match (self.remaining, uncovered) {
                    (0, _) => {
                        log::debug!("All safe cells uncovered");
                        Won
                    }
                    (_, 0) => NoChange,
                    (_, uncovered) => Revealed(uncovered),
                }
            }
        };

        Ok(outcome)
    }
}

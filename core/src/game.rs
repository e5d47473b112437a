use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

/// Result of a reveal. `changed` lists every cell whose visibility changed, in the order it changed, so a caller can
/// update its copy of the board incrementally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub changed: Vec<Coord2>,
}

impl RevealReport {
    fn unchanged() -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            changed: Vec::new(),
        }
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    revealed_count: CellCount,
    state: GameState,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Starts a game on a freshly generated board.
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = RandomBoardGenerator::from_entropy().generate(config)?;
        Ok(Self::with_board(board))
    }

    /// Starts a game on a prepared board, e.g. one laid out by a specific generator.
    pub fn with_board(board: Board) -> Self {
        let now = Utc::now();
        log::debug!("started at {}", now);
        Self {
            revealed_count: board.revealed_safe_count(),
            board,
            state: GameState::InProgress,
            started_at: Some(now),
            ended_at: None,
        }
    }

    /// Rebuilds a stored game. A finished game must carry an end time and an unfinished one must not, and the board
    /// has to agree with the state: a lost game shows a mine, a won game has every safe cell open, and a game in
    /// progress has neither.
    pub fn from_parts(
        board: Board,
        state: GameState,
        started_at: Option<DateTime<Utc>>,
        ended_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        if state.is_finished() != ended_at.is_some() {
            return Err(GameError::InvalidGameRecord);
        }
        if let (Some(started), Some(ended)) = (started_at, ended_at) {
            if ended < started {
                return Err(GameError::InvalidGameRecord);
            }
        }

        let revealed_count = board.revealed_safe_count();
        let cleared = revealed_count == board.safe_cell_count();
        let exploded = board.has_revealed_mine();
        let consistent = match state {
            GameState::InProgress => !cleared && !exploded,
            GameState::Won => cleared && !exploded,
            GameState::Lost => exploded,
        };
        if !consistent {
            log::debug!(
                "{:?} record does not match board: cleared={}, exploded={}",
                state,
                cleared,
                exploded
            );
            return Err(GameError::InvalidGameRecord);
        }

        Ok(Self {
            revealed_count,
            board,
            state,
            started_at,
            ended_at,
        })
    }

    /// Throws the current board away and starts over with a new one of the same configuration.
    pub fn reset(&mut self) -> Result<()> {
        let board = RandomBoardGenerator::from_entropy().generate(self.config())?;
        *self = Self::with_board(board);
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board.cell_at(coords)
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// How many seconds have passed since game started, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .clamp(0, u32::MAX.into()) as u32
        } else {
            0
        }
    }

    /// How many mines have not been flagged yet
    pub fn mines_left(&self) -> i64 {
        i64::from(self.board.mine_count()) - i64::from(self.board.flagged_count())
    }

    /// Share of safe cells revealed so far, between 0 and 1.
    pub fn progress(&self) -> f64 {
        f64::from(self.revealed_count) / f64::from(self.board.safe_cell_count())
    }

    /// Sets (`Some`) or toggles (`None`) the flag on a cell, returning its visibility afterwards.
    pub fn flag(&mut self, row: Coord, col: Coord, desired: Option<bool>) -> Result<Visibility> {
        use Visibility::*;

        let coords = self.board.validate_coords((row, col))?;
        self.check_in_progress()?;

        let current = self.board[coords].visibility;
        let next = match (current, desired) {
            (Revealed, _) => return Ok(Revealed),
            (Hidden, None) | (_, Some(true)) => Flagged,
            (Flagged, None) | (_, Some(false)) => Hidden,
        };

        if next != current {
            log::trace!("{:?} at {:?} -> {:?}", current, coords, next);
            self.board.set_visibility(coords, next);
        }
        Ok(next)
    }

    /// Reveals a hidden cell, flood-filling from it when no mines are adjacent.
    pub fn reveal(&mut self, row: Coord, col: Coord) -> Result<RevealReport> {
        let coords = self.board.validate_coords((row, col))?;
        self.check_in_progress()?;

        let cell = self.board[coords];
        if cell.visibility != Visibility::Hidden {
            return Ok(RevealReport::unchanged());
        }

        if cell.has_mine {
            log::debug!("Hit mine at {:?}", coords);
            let changed = self.reveal_mines();
            self.mark_ended(false);
            return Ok(RevealReport {
                outcome: RevealOutcome::HitMine,
                changed,
            });
        }

        let changed = self.flood_reveal(coords);

        let outcome = if self.revealed_count == self.board.safe_cell_count() {
            self.mark_ended(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };
        Ok(RevealReport { outcome, changed })
    }

    /// Opens `start` and, through zero cells, everything connected to it. A cell may be queued twice but leaves
    /// `Hidden` only once.
    fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut changed = Vec::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board[coords];
            if cell.visibility != Visibility::Hidden || cell.has_mine {
                continue;
            }

            self.board.set_visibility(coords, Visibility::Revealed);
            self.revealed_count += 1;
            changed.push(coords);
            log::trace!(
                "Opened cell at {:?}, mine count: {}",
                coords,
                cell.adjacent_count
            );

            if cell.adjacent_count == 0 {
                to_visit.extend(self.board.iter_neighbors(coords).filter(|&pos| {
                    let neighbor = self.board[pos];
                    neighbor.visibility == Visibility::Hidden && !neighbor.has_mine
                }));
            }
        }

        log::debug!("Revealed {} cells from {:?}", changed.len(), start);
        changed
    }

    /// Shows every mine, flagged or not. Flags on safe cells stay as they are.
    fn reveal_mines(&mut self) -> Vec<Coord2> {
        let mines: Vec<Coord2> = self
            .board
            .mine_coords()
            .filter(|&pos| !self.board[pos].is_revealed())
            .collect();
        for &pos in &mines {
            self.board.set_visibility(pos, Visibility::Revealed);
        }
        mines
    }

    fn mark_ended(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        let now = Utc::now();
        self.ended_at = Some(now);
        log::debug!("ended at {} ({:?})", now, self.state);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

//! The game state machine
//!
//! [`GameState`] is the single mutable root: the snapshot history, the
//! active step, the last explicitly selected step, and the move-list
//! sort direction. Everything else (whose turn it is, winner, draw,
//! status) is derived on demand so it can never go stale.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::board::{BOARD_CELLS, Board, Mark, Verdict, evaluate};
use crate::history::History;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("history step {step} is out of range (history has {len} snapshots)")]
    StepOutOfRange { step: usize, len: usize },
}

/// Where the active snapshot stands. `Won` and `Drawn` are terminal for
/// further moves, but jumping back into history re-enters `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    InProgress { next: Mark },
    Won { winner: Mark },
    Drawn,
}

impl fmt::Display for GamePhase {
    /// The user-facing status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress { next } => write!(f, "Next player: {next}"),
            Self::Won { winner } => write!(f, "Winner: {winner}"),
            Self::Drawn => f.write_str("Draw."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    current_step: usize,
    selected_step: Option<usize>,
    sort_ascending: bool,
}

impl Default for GameState {
    /// A fresh game: one empty snapshot, step 0, nothing selected,
    /// move list ascending.
    fn default() -> Self {
        Self {
            history: History::default(),
            current_step: 0,
            selected_step: None,
            sort_ascending: true,
        }
    }
}

impl GameState {
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.current_step
    }

    #[must_use]
    pub const fn selected_step(&self) -> Option<usize> {
        self.selected_step
    }

    #[must_use]
    pub const fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// The active snapshot.
    #[must_use]
    pub fn current_board(&self) -> Board {
        self.history
            .snapshot(self.current_step)
            .copied()
            .unwrap_or_default()
    }

    /// Whose turn the active step implies: X on even steps, O on odd.
    #[must_use]
    pub const fn next_player(&self) -> Mark {
        if self.current_step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Win check over the active snapshot.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        evaluate(&self.current_board())
    }

    /// A full board with no winner. Checked after the win check so a
    /// winning move on the last empty cell counts as a win.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.verdict().winner.is_none() && self.current_board().is_full()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if let Some(winner) = self.verdict().winner {
            GamePhase::Won { winner }
        } else if self.current_board().is_full() {
            GamePhase::Drawn
        } else {
            GamePhase::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Plays the next player's mark at `cell`. Clicks on a decided
    /// game, an occupied cell, or an out-of-range index are silently
    /// ignored. A move made after a jump back discards the abandoned
    /// future before appending.
    pub fn apply_move(&mut self, cell: usize) {
        let current = self.current_board();
        if evaluate(&current).winner.is_some() || cell >= BOARD_CELLS || current.get(cell).is_some()
        {
            return;
        }
        let next = current.with_mark(cell, self.next_player());
        self.history.push_from(self.current_step, next);
        self.current_step = self.history.last_step();
    }

    /// Makes `step` the active snapshot and remembers it as the
    /// selected list entry. History itself is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] for steps past the end of
    /// history; the state is left unchanged in that case.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.selected_step = Some(step);
        Ok(())
    }

    /// Flips the move-list display direction.
    pub fn toggle_sort_order(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }
}

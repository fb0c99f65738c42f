//! Chronological snapshot history
//!
//! A [`History`] is a non-empty sequence of board snapshots: index 0 is
//! always the empty starting board, and every later snapshot differs
//! from its predecessor in exactly one cell (the move that produced it).
//! The only mutator truncates then appends, so the sequence stays a
//! single linear timeline with no branches.
use serde::{Deserialize, Serialize};

use crate::board::{BOARD_CELLS, Board, Mark};

/// Where a move landed and who made it. Row and column are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    pub row: u8,
    pub column: u8,
    pub player: Mark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Board>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            snapshots: vec![Board::default()],
        }
    }
}

impl History {
    /// Number of snapshots, always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the latest snapshot.
    #[must_use]
    pub fn last_step(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    #[must_use]
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Drops every snapshot after `step`, then appends `board`. Moving
    /// after a jump back discards the abandoned future this way.
    pub fn push_from(&mut self, step: usize, board: Board) {
        self.snapshots.truncate(step + 1);
        self.snapshots.push(board);
    }

    /// Describes the move that produced snapshot `step` by diffing it
    /// against its predecessor. `None` for step 0 (game start) and for
    /// out-of-range steps.
    #[must_use]
    pub fn describe_move(&self, step: usize) -> Option<MoveSummary> {
        if step == 0 {
            return None;
        }
        let current = self.snapshots.get(step)?;
        let previous = self.snapshots.get(step - 1)?;
        (0..BOARD_CELLS).find_map(|cell| {
            if current.get(cell) == previous.get(cell) {
                return None;
            }
            current.get(cell).map(|player| MoveSummary {
                row: u8::try_from(cell / 3).unwrap_or(0) + 1,
                column: u8::try_from(cell % 3).unwrap_or(0) + 1,
                player,
            })
        })
    }

    /// Per-step move descriptions in ascending chronological order;
    /// entry 0 is `None` (game start). Display layers reverse this for
    /// descending order, the data itself is never re-sorted.
    #[must_use]
    pub fn summaries(&self) -> Vec<Option<MoveSummary>> {
        (0..self.snapshots.len())
            .map(|step| self.describe_move(step))
            .collect()
    }
}

//! Board model and win detection
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BOARD_CELLS: usize = 9;

/// The eight winning triples, in fixed priority order: rows top to
/// bottom, columns left to right, then the two diagonals. `evaluate`
/// reports the first match in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }

    /// The mark that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Self::X),
            "O" => Ok(Self::O),
            _ => Err(()),
        }
    }
}

impl From<Mark> for String {
    fn from(value: Mark) -> Self {
        value.as_str().to_string()
    }
}

/// One immutable 3x3 board snapshot, cells indexed 0..=8 in row-major
/// order. "Mutation" always goes through [`Board::with_mark`], which
/// returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    /// Mark at `cell`, or `None` when empty or out of range.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// Copy of this board with `cell` set to `mark`. Out-of-range
    /// indices leave the copy identical to the original.
    #[must_use]
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(slot) = next.cells.get_mut(cell) {
            *slot = Some(mark);
        }
        next
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.cells
    }
}

/// Outcome of a win check over one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    pub winner: Option<Mark>,
    pub line: Option<[usize; 3]>,
}

/// Checks the eight triples of [`LINES`] in order and returns the first
/// uniformly marked one. Pure and deterministic; a well-formed game
/// never produces two winning lines, but a malformed board resolves to
/// whichever triple enumerates first.
#[must_use]
pub fn evaluate(board: &Board) -> Verdict {
    for line in &LINES {
        let [a, b, c] = *line;
        if let Some(mark) = board.get(a)
            && board.get(b) == Some(mark)
            && board.get(c) == Some(mark)
        {
            return Verdict {
                winner: Some(mark),
                line: Some(*line),
            };
        }
    }
    Verdict::default()
}

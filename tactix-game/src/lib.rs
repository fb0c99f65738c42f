//! Tactix Game Engine
//!
//! Platform-agnostic core logic for Tactix, a tic-tac-toe game with
//! move-history time travel. This crate owns the board model, the win
//! check, and the history-aware game state machine; it has no UI or
//! platform-specific dependencies.

pub mod board;
pub mod history;
pub mod state;

// Re-export commonly used types
pub use board::{Board, LINES, Mark, Verdict, evaluate};
pub use history::{History, MoveSummary};
pub use state::{GameError, GamePhase, GameState};

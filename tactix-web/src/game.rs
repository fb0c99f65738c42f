//! Re-exports of the core game logic for the web layer
//!
//! Components and handlers reach the engine through `crate::game` so
//! the presentation code stays decoupled from the crate split.

pub use tactix_game::*;

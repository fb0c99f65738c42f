pub mod board;
pub mod square;
pub mod ui;

//! Implementation of the board, its movement rules and specifics.

pub mod board;
pub mod core;
pub mod error;
pub mod movegen;

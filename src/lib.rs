//! Pseudo-legal move generation for one side of a chess position.
//!
//! The crate enumerates every destination each piece of a given color can
//! reach according to its movement pattern and the board occupancy, without
//! checking whether the move exposes the mover's king. Castling, en passant
//! and promotion are not generated.
//!
//! ```
//! use chessmoves::chess::board::Board;
//! use chessmoves::chess::core::Color;
//! use chessmoves::chess::movegen;
//!
//! let moves = movegen::all_moves(&Board::starting(), Color::White).unwrap();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(movegen::distinct_pieces(&moves), 10);
//! ```

pub mod chess;

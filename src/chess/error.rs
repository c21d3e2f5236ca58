//! Errors produced while building boards and dispatching movement rules.
//!
//! Off-board coordinates are not errors: they are an expected outcome of
//! stepping along rays and offsets and are reported as `None`/`false` by
//! [`crate::chess::core::Square::offset`] and
//! [`crate::chess::board::Board::is_enterable`].

use crate::chess::core::{Color, PieceKind, Square};

/// Failures that callers must be able to tell apart from "no moves".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Piece kind char is not one of `"PRNBKQ"`.
    #[error("piece kind should be within \"PRNBKQ\", got '{0}'")]
    UnknownPieceKind(char),

    /// Color char is not `'W'` or `'B'`.
    #[error("color should be 'W' or 'B', got '{0}'")]
    UnknownColor(char),

    /// Square code is neither `"EE"` nor a two-char piece code.
    #[error("square code should be two chars, got \"{0}\"")]
    MalformedSquare(String),

    /// The arrangement is not 8x8.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// A piece reference that does not match the board contents.
    #[error("expected {color:?} {kind:?} at {square}, the board does not have it there")]
    PieceNotFound {
        #[allow(missing_docs)]
        kind: PieceKind,
        #[allow(missing_docs)]
        color: Color,
        #[allow(missing_docs)]
        square: Square,
    },
}

/// Result type alias for board and move generation operations.
pub type Result<T> = std::result::Result<T, Error>;

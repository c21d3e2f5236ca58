//! Pseudo-legal move generation.
//!
//! Every piece kind has its own movement rule:
//!
//! - Knight and King jump by a fixed list of offsets.
//! - Rook, Bishop and Queen slide along rays until the board edge, a friendly
//!   piece (excluded) or an opponent piece (included as a capture).
//! - Pawn advances to empty squares only and captures diagonally only.
//!
//! Each rule reports destinations in the order it visits them. [`all_moves`]
//! sorts them per piece and concatenates pieces in board scan order.
//!
//! The moves do not account for king safety: a move leaving own king in
//! check is still reported. Castling, en passant and promotion are not
//! generated.

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Color, Direction, LocatedPiece, Move, PieceKind, Square};
use crate::chess::error::{Error, Result};

/// Upper bound on destinations of a single piece: a queen in the middle of
/// an empty board.
pub const MAX_DESTINATIONS: usize = 27;

/// Destinations of a single piece.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

/// L-shaped jumps of a knight.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Generates moves of all pieces of given color.
///
/// Pieces are visited in row-major order (see [`Board::pieces`]) and the
/// destinations of each piece are sorted by (row, column).
///
/// ```
/// use chessmoves::chess::board::Board;
/// use chessmoves::chess::core::{Color, PieceKind, Square};
/// use chessmoves::chess::movegen;
///
/// let moves = movegen::all_moves(&Board::starting(), Color::White).unwrap();
/// assert_eq!(moves[0].piece.kind, PieceKind::Pawn);
/// assert_eq!(Some(moves[0].destination), Square::new(4, 0));
/// assert_eq!(Some(moves[1].destination), Square::new(5, 0));
/// ```
///
/// # Errors
///
/// Propagates [`moves_for_piece`] errors, which can not happen for the
/// pieces the board itself reports.
pub fn all_moves(board: &Board, color: Color) -> Result<Vec<Move>> {
    let mut moves = Vec::new();
    let mut pieces = 0_usize;
    for piece in board.pieces(color) {
        let mut destinations = moves_for_piece(board, piece, color)?;
        destinations.sort_unstable();
        tracing::trace!(
            kind = ?piece.kind,
            square = %piece.square,
            destinations = destinations.len(),
            "generated piece moves"
        );
        moves.extend(
            destinations
                .into_iter()
                .map(|destination| Move::new(piece, destination)),
        );
        pieces += 1;
    }
    tracing::debug!(%color, pieces, moves = moves.len(), "generated moves");
    Ok(moves)
}

/// Applies the movement rule of the piece kind. Destinations are in the
/// order the rule visits them, not sorted.
///
/// # Errors
///
/// Returns [`Error::PieceNotFound`] when the board does not hold a piece of
/// `color` and `piece.kind` on `piece.square`: a stale or made-up reference
/// is reported instead of producing moves for a piece that is not there.
pub fn moves_for_piece(board: &Board, piece: LocatedPiece, color: Color) -> Result<Destinations> {
    match board.at(piece.square) {
        Some(occupant) if occupant.color == color && occupant.kind == piece.kind => {},
        _ => {
            return Err(Error::PieceNotFound {
                kind: piece.kind,
                color,
                square: piece.square,
            })
        },
    }
    let square = piece.square;
    Ok(match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, color),
        PieceKind::Rook => rook_moves(board, square, color),
        PieceKind::Knight => knight_moves(board, square, color),
        PieceKind::Bishop => bishop_moves(board, square, color),
        PieceKind::King => king_moves(board, square, color),
        PieceKind::Queen => queen_moves(board, square, color),
    })
}

/// Counts distinct pieces that have at least one move.
///
/// ```
/// use chessmoves::chess::board::Board;
/// use chessmoves::chess::core::Color;
/// use chessmoves::chess::movegen;
///
/// let moves = movegen::all_moves(&Board::starting(), Color::Black).unwrap();
/// assert_eq!(movegen::distinct_pieces(&moves), 10);
/// ```
#[must_use]
pub fn distinct_pieces(moves: &[Move]) -> usize {
    moves.iter().map(|m| m.piece).unique().count()
}

/// Pawns advance one square (two from the starting row) onto empty squares
/// only and capture one square diagonally forward onto opponent pieces only.
///
/// Order: single push, double push, left capture, right capture.
#[must_use]
pub fn pawn_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    let direction = color.pawn_direction();
    if let Some(one_forward) = square.offset(direction, 0) {
        if board.at(one_forward).is_none() {
            destinations.push(one_forward);
            if square.row() == color.pawn_starting_row() {
                if let Some(two_forward) = one_forward.offset(direction, 0) {
                    if board.at(two_forward).is_none() {
                        destinations.push(two_forward);
                    }
                }
            }
        }
    }
    for d_column in [-1, 1] {
        let Some(target) = square.offset(direction, d_column) else {
            continue;
        };
        if board.at(target).is_some_and(|piece| piece.color != color) {
            destinations.push(target);
        }
    }
    destinations
}

/// L-shaped jumps, in `KNIGHT_OFFSETS` order.
#[must_use]
pub fn knight_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    step(board, square, color, KNIGHT_OFFSETS, &mut destinations);
    destinations
}

/// One step in any of the eight directions.
#[must_use]
pub fn king_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    step(
        board,
        square,
        color,
        Direction::ALL.map(Direction::offset),
        &mut destinations,
    );
    destinations
}

/// Slides along rows and columns: up, down, left, right.
#[must_use]
pub fn rook_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    slide(board, square, color, Direction::ORTHOGONAL, &mut destinations);
    destinations
}

/// Slides along diagonals: up-left, up-right, down-left, down-right.
#[must_use]
pub fn bishop_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    slide(board, square, color, Direction::DIAGONAL, &mut destinations);
    destinations
}

/// Rook moves followed by bishop moves from the same square.
#[must_use]
pub fn queen_moves(board: &Board, square: Square, color: Color) -> Destinations {
    let mut destinations = Destinations::new();
    slide(board, square, color, Direction::ORTHOGONAL, &mut destinations);
    slide(board, square, color, Direction::DIAGONAL, &mut destinations);
    destinations
}

/// Single jumps: each offset is taken if it lands on an enterable square.
fn step<const N: usize>(
    board: &Board,
    square: Square,
    color: Color,
    offsets: [(i8, i8); N],
    destinations: &mut Destinations,
) {
    destinations.extend(
        offsets
            .into_iter()
            .filter_map(|(d_row, d_column)| square.offset(d_row, d_column))
            .filter(|&target| board.can_enter(target, color)),
    );
}

/// Ray scan: every empty square along the direction, then the first
/// occupied one if it holds an opponent piece.
fn slide<const N: usize>(
    board: &Board,
    square: Square,
    color: Color,
    directions: [Direction; N],
    destinations: &mut Destinations,
) {
    for direction in directions {
        let mut current = square;
        while let Some(next) = current.shift(direction) {
            if !board.can_enter(next, color) {
                break;
            }
            destinations.push(next);
            if board.at(next).is_some() {
                break;
            }
            current = next;
        }
    }
}

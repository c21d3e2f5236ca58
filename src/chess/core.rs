//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::ops::Not;

use anyhow::bail;

use crate::chess::error::{Error, Result};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Location on the board. Row 0 is the edge where Black starts and row 7 is
/// White's starting edge; columns go from 0 to 7. Both coordinates are always
/// within the board: stepping off it yields `None` instead of a square.
///
/// ```
/// use chessmoves::chess::core::Square;
///
/// let square = Square::new(6, 0).unwrap();
/// assert_eq!(square.offset(-1, 0), Square::new(5, 0));
/// assert_eq!(square.offset(0, -1), None);
/// assert!(Square::new(8, 0).is_none());
/// ```
///
/// Squares are ordered by row, then by column: this is the order in which
/// destinations of a single piece are reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Creates a square if both coordinates are within the board.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row < BOARD_WIDTH && column < BOARD_WIDTH {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Same as [`Square::new`] but accepts signed coordinates, which is what
    /// offset arithmetic produces.
    #[must_use]
    pub fn from_signed(row: i8, column: i8) -> Option<Self> {
        match (u8::try_from(row), u8::try_from(column)) {
            (Ok(row), Ok(column)) => Self::new(row, column),
            _ => None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Position of the square in the row-major scan order.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row * BOARD_WIDTH + self.column) as usize
    }

    /// Shifts the square by given deltas. Returns `None` when the result
    /// falls off the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        // Both coordinates are < 8, the cast can not wrap.
        let row = (self.row as i8).checked_add(d_row)?;
        let column = (self.column as i8).checked_add(d_column)?;
        Self::from_signed(row, column)
    }

    /// Shifts the square one step in given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (d_row, d_column) = direction.offset();
        self.offset(d_row, d_column)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Directions on the board from a perspective of White player: "up" is
/// towards row 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as West.
    Left,
    /// Also known as East.
    Right,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// All directions, ordered by (row delta, column delta).
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Left,
        Self::Right,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// Rays of a rook.
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Rays of a bishop.
    pub const DIAGONAL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];

    /// (row delta, column delta) of a single step.
    #[must_use]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::DownLeft => (1, -1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
        }
    }
}

/// Side of the board. Determines which pieces are friendly and which way
/// pawns advance.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn advance: White moves towards row 0.
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row on which pawns of this color start and may advance two squares.
    #[must_use]
    pub const fn pawn_starting_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row holding the officers of this color in the starting position.
    #[must_use]
    pub const fn backrank(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(color: char) -> Result<Self> {
        match color {
            'W' => Ok(Self::White),
            'B' => Ok(Self::Black),
            _ => Err(Error::UnknownColor(color)),
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    /// Accepts "w", "b", "white" and "black" in any case.
    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Self::White),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("color should be 'w', 'b', 'white' or 'black', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'W',
            Self::Black => 'B',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl PieceKind {
    /// English name of the piece.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "Pawn",
            Self::Rook => "Rook",
            Self::Knight => "Knight",
            Self::Bishop => "Bishop",
            Self::King => "King",
            Self::Queen => "Queen",
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            'P' => Ok(Self::Pawn),
            'R' => Ok(Self::Rook),
            'N' => Ok(Self::Knight),
            'B' => Ok(Self::Bishop),
            'K' => Ok(Self::King),
            'Q' => Ok(Self::Queen),
            _ => Err(Error::UnknownPieceKind(symbol)),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::King => 'K',
            Self::Queen => 'Q',
        })
    }
}

/// Represents a specific piece owned by a player. The board stores
/// `Option<Piece>` per square, `None` being an empty square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub color: Color,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Parses a square code: `"EE"` is an empty square, any other code is a
    /// color char followed by a piece kind char (e.g. `"WN"` is a white
    /// knight).
    ///
    /// ```
    /// use chessmoves::chess::core::{Color, Piece, PieceKind};
    ///
    /// assert_eq!(Piece::from_code("EE"), Ok(None));
    /// assert_eq!(
    ///     Piece::from_code("BQ"),
    ///     Ok(Some(Piece::new(Color::Black, PieceKind::Queen)))
    /// );
    /// assert!(Piece::from_code("BX").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If the code is not two chars long or either char is not recognized.
    pub fn from_code(code: &str) -> Result<Option<Self>> {
        if code == EMPTY_CODE {
            return Ok(None);
        }
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(color), Some(kind), None) => Ok(Some(Self {
                color: color.try_into()?,
                kind: kind.try_into()?,
            })),
            _ => Err(Error::MalformedSquare(code.to_string())),
        }
    }
}

/// Code of an empty square in the two-char board representation.
pub const EMPTY_CODE: &str = "EE";

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.kind)
    }
}

/// A piece found on the board: its kind and where it stands. The color comes
/// from the context of the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocatedPiece {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub square: Square,
}

impl LocatedPiece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, square: Square) -> Self {
        Self { kind, square }
    }
}

/// Pseudo-legal move: the piece can reach `destination` by its movement
/// pattern and the destination is not occupied by a friendly piece. Whether
/// the move leaves own king in check is not verified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    #[allow(missing_docs)]
    pub piece: LocatedPiece,
    #[allow(missing_docs)]
    pub destination: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(piece: LocatedPiece, destination: Square) -> Self {
        Self { piece, destination }
    }
}

//! Square-centric ("mailbox") board: 64 squares each holding at most one
//! piece. The board is a plain value: move generation only ever reads it, so
//! any number of queries can share the same instance.
//!
//! Positions cross the crate boundary as 8 rows of 8 two-char codes: `"EE"`
//! for an empty square, otherwise a color char (`W`/`B`) followed by a piece
//! kind char (`P`, `R`, `N`, `B`, `K`, `Q`).

use std::fmt;

use anyhow::Context;
use itertools::iproduct;

use crate::chess::core::{
    Color,
    LocatedPiece,
    Piece,
    PieceKind,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
    EMPTY_CODE,
};
use crate::chess::error::{Error, Result};

/// Officers from column 0 to column 7, identical for both colors.
const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const fn starting_squares() -> [Option<Piece>; BOARD_SIZE as usize] {
    const WIDTH: usize = BOARD_WIDTH as usize;
    let mut squares = [None; BOARD_SIZE as usize];
    let colors = [Color::Black, Color::White];
    let mut i = 0;
    while i < colors.len() {
        let color = colors[i];
        let backrank = color.backrank() as usize * WIDTH;
        let pawns = color.pawn_starting_row() as usize * WIDTH;
        let mut column = 0;
        while column < WIDTH {
            squares[backrank + column] = Some(Piece::new(color, BACK_RANK[column]));
            squares[pawns + column] = Some(Piece::new(color, PieceKind::Pawn));
            column += 1;
        }
        i += 1;
    }
    squares
}

/// The default arrangement: Black on rows 0 and 1, White on rows 6 and 7.
pub const STARTING: Board = Board {
    squares: starting_squares(),
};

/// Piece placement on an 8x8 board, indexed by [`Square`] in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting position.
    ///
    /// ```
    /// use chessmoves::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string().lines().next(),
    ///     Some("BR BN BB BK BQ BB BN BR")
    /// );
    /// ```
    #[must_use]
    pub const fn starting() -> Self {
        STARTING
    }

    /// Builds a board from 8 rows of 8 square codes each.
    ///
    /// ```
    /// use chessmoves::chess::board::Board;
    /// use chessmoves::chess::core::Color;
    ///
    /// let mut rows = [["EE"; 8]; 8];
    /// rows[4][4] = "WQ";
    /// let board = Board::from_rows(&rows).unwrap();
    /// assert_eq!(board.find_pieces(Color::White).len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBoard`] if the arrangement is not 8x8 and the
    /// parsing error of the first invalid square code otherwise.
    pub fn from_rows<R, S>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        if rows.len() != BOARD_WIDTH as usize {
            tracing::debug!(rows = rows.len(), "rejected board");
            return Err(Error::MalformedBoard(format!(
                "expected {BOARD_WIDTH} rows, got {}",
                rows.len()
            )));
        }
        let mut board = Self::empty();
        for (row, codes) in (0..BOARD_WIDTH).zip(rows) {
            let codes: &[S] = codes.as_ref();
            if codes.len() != BOARD_WIDTH as usize {
                tracing::debug!(row, squares = codes.len(), "rejected board");
                return Err(Error::MalformedBoard(format!(
                    "expected {BOARD_WIDTH} squares in row {row}, got {}",
                    codes.len()
                )));
            }
            for (column, code) in (0..BOARD_WIDTH).zip(codes) {
                let code: &str = code.as_ref();
                let piece = Piece::from_code(code).inspect_err(|error| {
                    tracing::debug!(row, column, code, %error, "rejected board");
                })?;
                board.squares[(row * BOARD_WIDTH + column) as usize] = piece;
            }
        }
        Ok(board)
    }

    /// Returns a copy of the board with `piece` placed on `square`, replacing
    /// whatever was there.
    #[must_use]
    pub const fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.squares[square.index()] = Some(piece);
        self
    }

    /// Returns a copy of the board with `square` emptied.
    #[must_use]
    pub const fn without_piece(mut self, square: Square) -> Self {
        self.squares[square.index()] = None;
        self
    }

    /// Contents of the square.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Checks whether a piece of `mover` color may land on the square: it has
    /// to be on the board and either empty or occupied by an opponent piece
    /// (which would be captured). King safety is not considered.
    ///
    /// ```
    /// use chessmoves::chess::board::Board;
    /// use chessmoves::chess::core::Color;
    ///
    /// let board = Board::starting();
    /// assert!(board.is_enterable(5, 0, Color::White));
    /// assert!(board.is_enterable(1, 0, Color::White));
    /// assert!(!board.is_enterable(6, 0, Color::White));
    /// assert!(!board.is_enterable(-1, 0, Color::White));
    /// ```
    #[must_use]
    pub fn is_enterable(&self, row: i8, column: i8, mover: Color) -> bool {
        Square::from_signed(row, column).is_some_and(|square| self.can_enter(square, mover))
    }

    /// Same as [`Board::is_enterable`] for a square that is already known to
    /// be on the board.
    #[must_use]
    pub fn can_enter(&self, square: Square, mover: Color) -> bool {
        self.at(square).map_or(true, |piece| piece.color != mover)
    }

    /// Iterates over the pieces of given color in row-major order: row 0 to
    /// 7, column 0 to 7 within each row.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = LocatedPiece> + '_ {
        iproduct!(0..BOARD_WIDTH, 0..BOARD_WIDTH).filter_map(move |(row, column)| {
            let square = Square::new(row, column)?;
            let piece = self.at(square)?;
            (piece.color == color).then_some(LocatedPiece::new(piece.kind, square))
        })
    }

    /// Collects [`Board::pieces`].
    ///
    /// ```
    /// use chessmoves::chess::board::Board;
    /// use chessmoves::chess::core::{Color, PieceKind, Square};
    ///
    /// let pieces = Board::starting().find_pieces(Color::White);
    /// assert_eq!(pieces.len(), 16);
    /// assert_eq!(pieces[0].kind, PieceKind::Pawn);
    /// assert_eq!(Some(pieces[0].square), Square::new(6, 0));
    /// ```
    #[must_use]
    pub fn find_pieces(&self, color: Color) -> Vec<LocatedPiece> {
        self.pieces(color).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses 8 lines of 8 whitespace-separated square codes, the format
    /// produced by [`Board`]'s [`fmt::Display`]. Blank lines and surrounding
    /// whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Wraps [`Error`] describing the problem.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let rows: Vec<Vec<&str>> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();
        Self::from_rows(&rows).context("board should be 8 lines of 8 two-char square codes")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            match square {
                Some(piece) => write!(f, "{piece}")?,
                None => f.write_str(EMPTY_CODE)?,
            }
            let column = index % BOARD_WIDTH as usize;
            if column == BOARD_WIDTH as usize - 1 {
                writeln!(f)?;
            } else {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

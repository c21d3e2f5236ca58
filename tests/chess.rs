use chessmoves::chess::board::{Board, STARTING};
use chessmoves::chess::core::{Color, LocatedPiece, Piece, PieceKind, Square};
use chessmoves::chess::error::Error;
use pretty_assertions::assert_eq;

#[rustfmt::skip]
const MIDGAME: [[&str; 8]; 8] = [
    ["BR", "BN", "BB", "BK", "EE", "BB", "BN", "BR"],
    ["BP", "BP", "BP", "BP", "EE", "BP", "BP", "BP"],
    ["EE", "EE", "EE", "EE", "EE", "EE", "EE", "EE"],
    ["EE", "EE", "EE", "EE", "BP", "EE", "BQ", "EE"],
    ["EE", "WP", "EE", "EE", "WP", "EE", "WQ", "EE"],
    ["EE", "EE", "EE", "EE", "EE", "EE", "EE", "EE"],
    ["WP", "EE", "WP", "WP", "EE", "WP", "WP", "WP"],
    ["WR", "WN", "WB", "WK", "EE", "WB", "WN", "WR"],
];

fn square(row: u8, column: u8) -> Square {
    Square::new(row, column).expect("test squares are on the board")
}

fn setup(rows: &[[&str; 8]; 8]) -> Board {
    Board::from_rows(rows).expect("parsing valid board")
}

#[test]
fn starting_position() {
    assert_eq!(Board::starting(), STARTING);
    assert_eq!(Board::default(), STARTING);
    let text = Board::starting().to_string();
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "BR BN BB BK BQ BB BN BR",
            "BP BP BP BP BP BP BP BP",
            "EE EE EE EE EE EE EE EE",
            "EE EE EE EE EE EE EE EE",
            "EE EE EE EE EE EE EE EE",
            "EE EE EE EE EE EE EE EE",
            "WP WP WP WP WP WP WP WP",
            "WR WN WB WK WQ WB WN WR",
        ]
    );
    assert_eq!(Board::try_from(text.as_str()).unwrap(), STARTING);
}

#[test]
fn caller_supplied_arrangement() {
    let board = setup(&MIDGAME);
    assert_eq!(
        board.at(square(3, 6)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(board.at(square(7, 4)), None);
    // Display and parsing agree.
    assert_eq!(Board::try_from(board.to_string().as_str()).unwrap(), board);
}

#[test]
fn board_is_not_mutated_by_queries() {
    let board = setup(&MIDGAME);
    let snapshot = board;
    assert_eq!(board.find_pieces(Color::White).len(), 16);
    assert!(board.is_enterable(3, 3, Color::Black));
    let moves = chessmoves::chess::movegen::all_moves(&board, Color::Black).unwrap();
    assert!(!moves.is_empty());
    assert_eq!(board, snapshot);
}

#[test]
fn empty_square_is_enterable_by_either_color() {
    let board = Board::starting();
    assert!(board.is_enterable(5, 0, Color::White));
    assert!(board.is_enterable(5, 0, Color::Black));
}

#[test]
fn off_board_is_never_enterable() {
    for board in [Board::starting(), Board::empty(), setup(&MIDGAME)] {
        for row in -3..11 {
            for column in -3..11 {
                if (0..8).contains(&row) && (0..8).contains(&column) {
                    continue;
                }
                for color in [Color::White, Color::Black] {
                    assert!(
                        !board.is_enterable(row, column, color),
                        "({row}, {column}) is off the board"
                    );
                }
            }
        }
    }
}

#[test]
fn friendly_blocks_enemy_is_capturable() {
    let board = setup(&MIDGAME);
    // White queen.
    assert!(!board.is_enterable(4, 6, Color::White));
    assert!(board.is_enterable(4, 6, Color::Black));
    // Black pawn.
    assert!(board.is_enterable(3, 4, Color::White));
    assert!(!board.is_enterable(3, 4, Color::Black));
}

#[test]
fn find_pieces_in_starting_position() {
    let board = Board::starting();
    assert_eq!(
        board.find_pieces(Color::White)[0],
        LocatedPiece::new(PieceKind::Pawn, square(6, 0))
    );
    assert_eq!(
        board.find_pieces(Color::Black)[7],
        LocatedPiece::new(PieceKind::Rook, square(0, 7))
    );
}

#[test]
fn find_pieces_in_midgame() {
    let board = setup(&MIDGAME);
    let white = board.find_pieces(Color::White);
    assert_eq!(white.len(), 16);
    assert_eq!(white[0], LocatedPiece::new(PieceKind::Pawn, square(4, 1)));
    assert_eq!(white[2], LocatedPiece::new(PieceKind::Queen, square(4, 6)));
    assert_eq!(white[11], LocatedPiece::new(PieceKind::Bishop, square(7, 2)));
    let black = board.find_pieces(Color::Black);
    assert_eq!(black.len(), 16);
    assert_eq!(black[3], LocatedPiece::new(PieceKind::King, square(0, 3)));
    assert_eq!(black[14], LocatedPiece::new(PieceKind::Pawn, square(3, 4)));
    assert_eq!(black[15], LocatedPiece::new(PieceKind::Queen, square(3, 6)));
}

#[test]
fn find_pieces_matches_board_contents() {
    for board in [Board::starting(), Board::empty(), setup(&MIDGAME)] {
        for color in [Color::White, Color::Black] {
            let pieces = board.find_pieces(color);
            for piece in &pieces {
                assert_eq!(board.at(piece.square), Some(Piece::new(color, piece.kind)));
            }
            let expected_count = board
                .to_string()
                .split_whitespace()
                .filter(|code| code.starts_with(&color.to_string()))
                .count();
            assert_eq!(pieces.len(), expected_count);
            // Deterministic scan order.
            assert_eq!(pieces, board.find_pieces(color));
        }
    }
}

#[test]
fn malformed_boards_fail_at_construction() {
    let mut rows = MIDGAME;
    rows[5][5] = "WX";
    assert_eq!(Board::from_rows(&rows), Err(Error::UnknownPieceKind('X')));
    rows[5][5] = "EEE";
    assert_eq!(
        Board::from_rows(&rows),
        Err(Error::MalformedSquare("EEE".to_string()))
    );
    assert!(matches!(
        Board::from_rows(&MIDGAME[..7]),
        Err(Error::MalformedBoard(_))
    ));
    let mut ragged: Vec<Vec<&str>> = MIDGAME.iter().map(|codes| codes.to_vec()).collect();
    let _ = ragged[6].pop();
    assert_eq!(
        Board::from_rows(&ragged),
        Err(Error::MalformedBoard(
            "expected 8 squares in row 6, got 7".to_string()
        ))
    );
}

#[test]
fn malformed_text() {
    let error = Board::try_from("WP WP\nEE").unwrap_err();
    assert!(error
        .to_string()
        .contains("board should be 8 lines of 8 two-char square codes"));
    assert!(error.downcast_ref::<Error>().is_some());
    // Don't crash on unicode symbols.
    let unicode = Board::starting().to_string().replacen("WK", "♔", 1);
    assert!(Board::try_from(unicode.as_str()).is_err());
    let unicode = Board::starting().to_string().replacen("WK", "W♔", 1);
    assert_eq!(
        Board::try_from(unicode.as_str())
            .unwrap_err()
            .downcast_ref::<Error>(),
        Some(&Error::UnknownPieceKind('♔'))
    );
}

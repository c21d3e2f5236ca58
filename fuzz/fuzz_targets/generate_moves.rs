#![no_main]
use chessmoves::chess::board::Board;
use chessmoves::chess::core::{Color, PieceKind};
use chessmoves::chess::movegen;
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;

const CODES: [&str; 13] = [
    "EE", "WP", "WR", "WN", "WB", "WK", "WQ", "BP", "BR", "BN", "BB", "BK", "BQ",
];

// Every byte picks the contents of one square.
fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }
    let rows = data[..64]
        .iter()
        .map(|byte| CODES[*byte as usize % CODES.len()])
        .chunks(8)
        .into_iter()
        .map(|chunk| chunk.collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let board = Board::from_rows(&rows).expect("generated codes are valid");
    for color in [Color::White, Color::Black] {
        let moves = movegen::all_moves(&board, color).expect("pieces come from the board");
        assert_eq!(moves, movegen::all_moves(&board, color).unwrap());
        for m in &moves {
            assert!(board.can_enter(m.destination, color));
            if m.piece.kind == PieceKind::Pawn {
                let occupant = board.at(m.destination);
                if m.destination.column() == m.piece.square.column() {
                    assert!(occupant.is_none());
                } else {
                    assert_eq!(occupant.map(|p| p.color), Some(color.opponent()));
                }
            }
        }
    }
});

#![no_main]

use gambit::{Position, RulesEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // Parsing arbitrary text must never panic.
    let Ok(pos) = Position::from_fen(text) else {
        return;
    };

    // A parsed position serializes to a FEN that parses back to itself.
    let fen = pos.fen();
    let reparsed = match Position::from_fen(&fen) {
        Ok(p) => p,
        Err(err) => panic!("serialized FEN {fen:?} does not parse: {err}"),
    };
    assert_eq!(reparsed.fen(), fen);

    // Move generation and terminal queries must not panic on odd but
    // parseable positions.
    let moves = pos.legal_moves();
    for mv in moves.iter().take(8) {
        let mut next = pos;
        let played = next.make_move(gambit::rules::MoveRequest {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        });
        assert!(played.is_some(), "legal move {mv} was refused");
        assert_ne!(played.map(|p| p.captured), Some(Some(gambit::rules::PieceType::King)));
    }
    let _ = pos.is_checkmate();
    let _ = pos.is_stalemate();
});

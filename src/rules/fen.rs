//! FEN parsing and serialization.

// Board coordinates always fit in a u8.
#![allow(clippy::cast_possible_truncation)]

use crate::error::FenError;
use crate::rules::position::{CastlingRights, Position};
use crate::rules::types::{Color, Piece, PieceType, Square};

/// Standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Empty board, white to move.
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// Parse a FEN string.
///
/// The piece-placement field is required. Missing trailing fields default to
/// `w - - 0 1`.
pub(crate) fn parse(text: &str) -> Result<Position, FenError> {
    let mut fields = text.split_whitespace();
    let placement = fields.next().ok_or(FenError::Empty)?;

    let mut pos = Position::empty();
    parse_placement(placement, &mut pos)?;

    pos.turn = match fields.next().unwrap_or("w") {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::Turn(other.to_string())),
    };

    pos.castling = parse_castling(fields.next().unwrap_or("-"))?;

    pos.en_passant = match fields.next().unwrap_or("-") {
        "-" => None,
        sq => Some(Square::parse(sq).ok_or_else(|| FenError::EnPassant(sq.to_string()))?),
    };

    pos.halfmove = parse_counter(fields.next().unwrap_or("0"))?;
    pos.fullmove = parse_counter(fields.next().unwrap_or("1"))?.max(1);

    Ok(pos)
}

fn parse_placement(placement: &str, pos: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut kings = [false; 2];
    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file: usize = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::Piece(c))?;
            if file >= 8 {
                return Err(FenError::FileCount { rank: rank + 1, files: file + 1 });
            }
            if piece.kind == PieceType::King {
                let slot = &mut kings[usize::from(piece.color == Color::Black)];
                if *slot {
                    return Err(FenError::DuplicateKing(match piece.color {
                        Color::White => "white",
                        Color::Black => "black",
                    }));
                }
                *slot = true;
            }
            if let Some(sq) = Square::new(file as u8, rank) {
                pos.board[sq.index()] = Some(piece);
            }
            file += 1;
        }
        if file != 8 {
            return Err(FenError::FileCount { rank: rank + 1, files: file });
        }
    }
    Ok(())
}

fn parse_castling(text: &str) -> Result<CastlingRights, FenError> {
    if text == "-" {
        return Ok(CastlingRights::NONE);
    }
    let mut rights = CastlingRights::NONE;
    for c in text.chars() {
        let flag = match c {
            'K' => CastlingRights::WHITE_KING,
            'Q' => CastlingRights::WHITE_QUEEN,
            'k' => CastlingRights::BLACK_KING,
            'q' => CastlingRights::BLACK_QUEEN,
            _ => return Err(FenError::Castling(text.to_string())),
        };
        rights.insert(flag);
    }
    Ok(rights)
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::Counter(text.to_string()))
}

/// Serialize a position to FEN.
pub(crate) fn serialize(pos: &Position) -> String {
    let mut out = String::with_capacity(90);

    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for file in 0..8u8 {
            let piece = Square::new(file, rank).and_then(|sq| pos.board[sq.index()]);
            match piece {
                Some(p) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(p.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(pos.turn.to_char());
    out.push(' ');
    out.push_str(&pos.castling.to_fen());
    out.push(' ');
    match pos.en_passant {
        Some(sq) => out.push_str(&sq.to_string()),
        None => out.push('-'),
    }
    out.push_str(&format!(" {} {}", pos.halfmove, pos.fullmove));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_roundtrip() {
        let pos = parse(STARTING_FEN).unwrap();
        assert_eq!(serialize(&pos), STARTING_FEN);
    }

    #[test]
    fn test_empty_roundtrip() {
        let pos = parse(EMPTY_FEN).unwrap();
        assert_eq!(serialize(&pos), EMPTY_FEN);
    }

    #[test]
    fn test_missing_fields_default() {
        let pos = parse("4k3/8/8/8/8/8/4P3/4K3").unwrap();
        assert_eq!(serialize(&pos), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    }

    #[test]
    fn test_rejects_bad_rank_count() {
        assert_eq!(parse("8/8/8 w - - 0 1"), Err(FenError::RankCount(3)));
    }

    #[test]
    fn test_rejects_bad_file_count() {
        assert!(matches!(
            parse("9/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::FileCount { rank: 8, .. })
        ));
        assert!(matches!(
            parse("ppppppppp/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::FileCount { rank: 8, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_piece_and_turn() {
        assert_eq!(parse("8/8/8/8/8/8/8/7x w - - 0 1"), Err(FenError::Piece('x')));
        assert!(matches!(parse("8/8/8/8/8/8/8/8 x - - 0 1"), Err(FenError::Turn(_))));
    }

    #[test]
    fn test_rejects_duplicate_king() {
        assert_eq!(
            parse("kk6/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::DuplicateKing("black"))
        );
    }

    #[test]
    fn test_en_passant_field() {
        let fen = "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1";
        let pos = parse(fen).unwrap();
        assert_eq!(pos.en_passant, Square::parse("e3"));
        assert_eq!(serialize(&pos), fen);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(parse("   "), Err(FenError::Empty));
    }
}

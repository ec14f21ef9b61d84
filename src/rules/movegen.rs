//! Attack detection and legal move generation.
//!
//! Pseudo-legal moves are generated per piece and then filtered by playing
//! each one on a copy of the position and rejecting those that leave the
//! mover's king attacked. Kings are never captured: a move onto a king square
//! is not generated.

use crate::rules::position::{CastlingRights, Position};
use crate::rules::types::{Color, Piece, PieceType, Square};
use crate::rules::{ChessMove, MoveKind};

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const PROMOTIONS: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

pub(crate) fn king_square(pos: &Position, color: Color) -> Option<Square> {
    let king = Some(Piece::new(PieceType::King, color));
    (0..64u8)
        .filter_map(Square::from_index)
        .find(|sq| pos.board[sq.index()] == king)
}

/// True iff `target` is attacked by any piece of color `by`.
pub(crate) fn is_attacked(pos: &Position, target: Square, by: Color) -> bool {
    let holds = |sq: Option<Square>, kind: PieceType| {
        sq.and_then(|s| pos.board[s.index()]) == Some(Piece::new(kind, by))
    };

    // A pawn of `by` attacks diagonally forward, so look one rank behind.
    let back = -by.forward();
    if holds(target.offset(-1, back), PieceType::Pawn)
        || holds(target.offset(1, back), PieceType::Pawn)
    {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), PieceType::Knight))
    {
        return true;
    }

    if KING_STEPS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), PieceType::King))
    {
        return true;
    }

    ray_hits(pos, target, &ROOK_DIRS, by, PieceType::Rook)
        || ray_hits(pos, target, &BISHOP_DIRS, by, PieceType::Bishop)
}

/// Walk each ray from `target`; true if the first piece met is a `slider` or
/// queen of color `by`.
fn ray_hits(
    pos: &Position,
    target: Square,
    dirs: &[(i8, i8)],
    by: Color,
    slider: PieceType,
) -> bool {
    for &(df, dr) in dirs {
        let mut cur = target.offset(df, dr);
        while let Some(sq) = cur {
            if let Some(piece) = pos.board[sq.index()] {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceType::Queen) {
                    return true;
                }
                break;
            }
            cur = sq.offset(df, dr);
        }
    }
    false
}

/// All legal moves for the side to move.
pub(crate) fn legal_moves(pos: &Position) -> Vec<ChessMove> {
    let us = pos.turn;
    pseudo_legal(pos)
        .into_iter()
        .filter(|mv| {
            let mut next = *pos;
            apply(&mut next, mv);
            next.king_square(us)
                .is_none_or(|king| !is_attacked(&next, king, us.opposite()))
        })
        .collect()
}

fn pseudo_legal(pos: &Position) -> Vec<ChessMove> {
    let us = pos.turn;
    let mut out = Vec::with_capacity(48);

    for from in (0..64u8).filter_map(Square::from_index) {
        let Some(piece) = pos.board[from.index()] else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceType::Pawn => pawn_moves(pos, from, us, &mut out),
            PieceType::Knight => step_moves(pos, from, piece.kind, &KNIGHT_DELTAS, &mut out),
            PieceType::Bishop => slide_moves(pos, from, piece.kind, &BISHOP_DIRS, &mut out),
            PieceType::Rook => slide_moves(pos, from, piece.kind, &ROOK_DIRS, &mut out),
            PieceType::Queen => {
                slide_moves(pos, from, piece.kind, &ROOK_DIRS, &mut out);
                slide_moves(pos, from, piece.kind, &BISHOP_DIRS, &mut out);
            }
            PieceType::King => {
                step_moves(pos, from, piece.kind, &KING_STEPS, &mut out);
                castle_moves(pos, from, us, &mut out);
            }
        }
    }

    out
}

/// What a piece of color `us` finds on `to`: `Ok(None)` empty, `Ok(Some)`
/// capturable enemy, `Err` blocked (own piece or enemy king).
fn landing(pos: &Position, to: Square, us: Color) -> Result<Option<PieceType>, ()> {
    match pos.board[to.index()] {
        None => Ok(None),
        Some(p) if p.color != us && p.kind != PieceType::King => Ok(Some(p.kind)),
        Some(_) => Err(()),
    }
}

fn push_move(
    out: &mut Vec<ChessMove>,
    from: Square,
    to: Square,
    piece: PieceType,
    captured: Option<PieceType>,
    kind: MoveKind,
) {
    out.push(ChessMove {
        from,
        to,
        piece,
        captured,
        promotion: None,
        kind,
    });
}

fn pawn_moves(pos: &Position, from: Square, us: Color, out: &mut Vec<ChessMove>) {
    let fwd = us.forward();
    let promote_rank = us.promotion_rank();

    let mut push_pawn = |to: Square, captured: Option<PieceType>, kind: MoveKind| {
        if to.rank() == promote_rank {
            for promo in PROMOTIONS {
                out.push(ChessMove {
                    from,
                    to,
                    piece: PieceType::Pawn,
                    captured,
                    promotion: Some(promo),
                    kind,
                });
            }
        } else {
            push_move(out, from, to, PieceType::Pawn, captured, kind);
        }
    };

    if let Some(one) = from.offset(0, fwd)
        && pos.board[one.index()].is_none()
    {
        push_pawn(one, None, MoveKind::Normal);
        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, fwd)
            && pos.board[two.index()].is_none()
        {
            push_pawn(two, None, MoveKind::DoublePush);
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, fwd) else {
            continue;
        };
        match pos.board[to.index()] {
            Some(p) if p.color != us && p.kind != PieceType::King => {
                push_pawn(to, Some(p.kind), MoveKind::Normal);
            }
            None if pos.en_passant == Some(to) => {
                push_pawn(to, Some(PieceType::Pawn), MoveKind::EnPassant);
            }
            _ => {}
        }
    }
}

fn step_moves(
    pos: &Position,
    from: Square,
    kind: PieceType,
    deltas: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let us = pos.turn;
    for &(df, dr) in deltas {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        if let Ok(captured) = landing(pos, to, us) {
            push_move(out, from, to, kind, captured, MoveKind::Normal);
        }
    }
}

fn slide_moves(
    pos: &Position,
    from: Square,
    kind: PieceType,
    dirs: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    let us = pos.turn;
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match landing(pos, to, us) {
                Ok(None) => push_move(out, from, to, kind, None, MoveKind::Normal),
                Ok(Some(captured)) => {
                    push_move(out, from, to, kind, Some(captured), MoveKind::Normal);
                    break;
                }
                Err(()) => break,
            }
            cur = to.offset(df, dr);
        }
    }
}

fn castle_moves(pos: &Position, from: Square, us: Color, out: &mut Vec<ChessMove>) {
    let rank = us.back_rank();
    if from != sq(4, rank) {
        return;
    }
    let them = us.opposite();
    if is_attacked(pos, from, them) {
        return;
    }
    let (king_side, queen_side) = CastlingRights::for_color(us);
    let rook = Some(Piece::new(PieceType::Rook, us));
    let empty = |file: u8| pos.board[sq(file, rank).index()].is_none();
    let safe = |file: u8| !is_attacked(pos, sq(file, rank), them);

    if pos.castling.contains(king_side)
        && pos.board[sq(7, rank).index()] == rook
        && empty(5)
        && empty(6)
        && safe(5)
        && safe(6)
    {
        push_move(out, from, sq(6, rank), PieceType::King, None, MoveKind::CastleKingside);
    }

    if pos.castling.contains(queen_side)
        && pos.board[sq(0, rank).index()] == rook
        && empty(1)
        && empty(2)
        && empty(3)
        && safe(2)
        && safe(3)
    {
        push_move(out, from, sq(2, rank), PieceType::King, None, MoveKind::CastleQueenside);
    }
}

/// Board square from file and rank known to be in range.
fn sq(file: u8, rank: u8) -> Square {
    Square::new(file & 7, rank & 7).unwrap_or_else(|| unreachable!("masked to board range"))
}

/// Play a move without checking legality.
pub(crate) fn apply(pos: &mut Position, mv: &ChessMove) {
    let us = pos.turn;
    let moving = pos.board[mv.from.index()].take();
    let placed = match mv.promotion {
        Some(promo) => Some(Piece::new(promo, us)),
        None => moving,
    };

    if mv.kind == MoveKind::EnPassant
        && let Some(victim) = mv.to.offset(0, -us.forward())
    {
        pos.board[victim.index()] = None;
    }
    pos.board[mv.to.index()] = placed;

    let rank = us.back_rank();
    match mv.kind {
        MoveKind::CastleKingside => {
            let rook = pos.board[sq(7, rank).index()].take();
            pos.board[sq(5, rank).index()] = rook;
        }
        MoveKind::CastleQueenside => {
            let rook = pos.board[sq(0, rank).index()].take();
            pos.board[sq(3, rank).index()] = rook;
        }
        _ => {}
    }

    update_castling(pos, mv, us);

    pos.en_passant = if mv.kind == MoveKind::DoublePush {
        mv.from.offset(0, us.forward())
    } else {
        None
    };

    if mv.piece == PieceType::Pawn || mv.captured.is_some() {
        pos.halfmove = 0;
    } else {
        pos.halfmove = pos.halfmove.saturating_add(1);
    }
    if us == Color::Black {
        pos.fullmove = pos.fullmove.saturating_add(1);
    }
    pos.turn = us.opposite();
}

fn update_castling(pos: &mut Position, mv: &ChessMove, us: Color) {
    if mv.piece == PieceType::King {
        let (k, q) = CastlingRights::for_color(us);
        pos.castling.remove(k);
        pos.castling.remove(q);
    }
    // A rook leaving or being captured on its corner loses that right.
    for corner in [mv.from, mv.to] {
        for color in [Color::White, Color::Black] {
            let (k, q) = CastlingRights::for_color(color);
            let rank = color.back_rank();
            if corner == sq(7, rank) {
                pos.castling.remove(k);
            } else if corner == sq(0, rank) {
                pos.castling.remove(q);
            }
        }
    }
}

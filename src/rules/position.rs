//! Standard-rules position and its [`RulesEngine`] implementation.

use crate::error::FenError;
use crate::rules::fen;
use crate::rules::movegen;
use crate::rules::types::{Color, Piece, PieceType, Square};
use crate::rules::{ChessMove, Grid, MoveRequest, RulesEngine};

/// Castling availability bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CastlingRights(u8);

impl CastlingRights {
    pub(crate) const NONE: Self = Self(0);
    pub(crate) const WHITE_KING: Self = Self(1);
    pub(crate) const WHITE_QUEEN: Self = Self(2);
    pub(crate) const BLACK_KING: Self = Self(4);
    pub(crate) const BLACK_QUEEN: Self = Self(8);

    pub(crate) const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub(crate) fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub(crate) fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Kingside and queenside flags for a color.
    pub(crate) const fn for_color(color: Color) -> (Self, Self) {
        match color {
            Color::White => (Self::WHITE_KING, Self::WHITE_QUEEN),
            Color::Black => (Self::BLACK_KING, Self::BLACK_QUEEN),
        }
    }

    pub(crate) fn to_fen(self) -> String {
        if self.0 == 0 {
            return "-".to_string();
        }
        [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, c)| *c)
        .collect()
    }
}

/// A chess position with full standard rules: castling, en passant and
/// promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove: u32,
    pub(crate) fullmove: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    /// Empty board, white to move, no castling rights.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            board: [None; 64],
            turn: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove: 0,
            fullmove: 1,
        }
    }

    /// Standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        // The constant is known-good; fall back to an empty board rather than
        // panic if that ever changes.
        fen::parse(fen::STARTING_FEN).unwrap_or_else(|_| Self::empty())
    }

    /// Parse a position from FEN.
    ///
    /// # Errors
    ///
    /// Returns an error if the FEN is malformed.
    pub fn from_fen(text: &str) -> Result<Self, FenError> {
        fen::parse(text)
    }

    /// Square of the king of `color`, if present.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        movegen::king_square(self, color)
    }

    /// Whether `square` is attacked by any piece of `by`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        movegen::is_attacked(self, square, by)
    }

    /// Count of pieces of each side.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|p| p.color == color)
            .count()
    }
}

impl RulesEngine for Position {
    fn load(&mut self, fen: &str) -> Result<(), FenError> {
        *self = fen::parse(fen)?;
        Ok(())
    }

    fn clear(&mut self) {
        *self = Self::empty();
    }

    fn put(&mut self, piece: Piece, square: Square) -> bool {
        if piece.kind == PieceType::King
            && let Some(existing) = self.king_square(piece.color)
            && existing != square
        {
            return false;
        }
        self.board[square.index()] = Some(piece);
        true
    }

    fn remove(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    fn get(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    fn make_move(&mut self, request: MoveRequest) -> Option<ChessMove> {
        let promotion = request.promotion.unwrap_or(PieceType::Queen);
        let chosen = movegen::legal_moves(self).into_iter().find(|mv| {
            mv.from == request.from
                && mv.to == request.to
                && mv.promotion.is_none_or(|p| p == promotion)
        })?;
        movegen::apply(self, &chosen);
        Some(chosen)
    }

    fn legal_moves(&self) -> Vec<ChessMove> {
        movegen::legal_moves(self)
    }

    fn is_check(&self) -> bool {
        self.king_square(self.turn)
            .is_some_and(|king| self.is_attacked(king, self.turn.opposite()))
    }

    fn is_checkmate(&self) -> bool {
        self.is_check() && movegen::legal_moves(self).is_empty()
    }

    fn is_stalemate(&self) -> bool {
        !self.is_check() && movegen::legal_moves(self).is_empty()
    }

    fn turn(&self) -> Color {
        self.turn
    }

    fn board(&self) -> Grid {
        let mut grid: Grid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let sq = Square::new(col as u8, 7 - row as u8);
                *cell = sq.and_then(|sq| self.board[sq.index()]);
            }
        }
        grid
    }

    fn fen(&self) -> String {
        fen::serialize(self)
    }
}

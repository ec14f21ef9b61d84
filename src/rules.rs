//! Chess rules collaborator.
//!
//! The run core never inspects chess rules directly. It talks to a
//! [`RulesEngine`], a narrow capability set covering position mutation, move
//! application, terminal-condition queries and FEN serialization. [`Position`]
//! is the bundled standard-rules implementation; any other engine that honors
//! the same contract can be plugged into [`crate::game::Run`] or
//! [`crate::game::gen_stage_with`].

mod fen;
mod movegen;
mod position;
mod types;

use std::fmt;

use serde::Serialize;

pub use fen::{EMPTY_FEN, STARTING_FEN};
pub use position::Position;
pub use types::{Color, Piece, PieceType, Square, squares};

use crate::error::FenError;

/// An 8x8 board snapshot. Row 0 is rank 8 and column 0 is file a.
pub type Grid = [[Option<Piece>; 8]; 8];

/// A requested move, as issued by the player or the opponent mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Piece to promote to when the move is a promotion. Queen if absent.
    pub promotion: Option<PieceType>,
}

impl MoveRequest {
    /// A move request that promotes to a queen when promotion applies.
    #[must_use]
    pub const fn auto_queen(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: Some(PieceType::Queen),
        }
    }
}

/// Special-move classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    /// Pawn advancing two squares from its start rank.
    DoublePush,
    /// En passant capture.
    EnPassant,
    /// King-side castling.
    CastleKingside,
    /// Queen-side castling.
    CastleQueenside,
}

/// A legal move as produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChessMove {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// Piece that moved (before promotion).
    pub piece: PieceType,
    /// Piece captured, if any.
    pub captured: Option<PieceType>,
    /// Promotion piece, if the move promotes.
    pub promotion: Option<PieceType>,
    /// Special-move classification.
    pub kind: MoveKind,
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

/// Capability set the run core needs from a chess rules implementation.
pub trait RulesEngine {
    /// Replace the current position with one parsed from FEN.
    ///
    /// # Errors
    ///
    /// Returns an error if the FEN is malformed.
    fn load(&mut self, fen: &str) -> Result<(), FenError>;

    /// Empty the board: white to move, no castling, no en passant.
    fn clear(&mut self);

    /// Place a piece, replacing whatever stood there.
    ///
    /// Returns `false` (and leaves the board unchanged) when the piece is a
    /// king and that side already has a king elsewhere.
    fn put(&mut self, piece: Piece, square: Square) -> bool;

    /// Remove and return the piece on a square.
    fn remove(&mut self, square: Square) -> Option<Piece>;

    /// Piece on a square.
    fn get(&self, square: Square) -> Option<Piece>;

    /// Apply a move if it is legal for the side to move.
    ///
    /// Returns `None` for illegal requests, leaving the position unchanged.
    fn make_move(&mut self, request: MoveRequest) -> Option<ChessMove>;

    /// All legal moves for the side to move.
    fn legal_moves(&self) -> Vec<ChessMove>;

    /// Whether the side to move is in check.
    fn is_check(&self) -> bool;

    /// Whether the side to move is checkmated.
    fn is_checkmate(&self) -> bool;

    /// Whether the side to move is stalemated.
    fn is_stalemate(&self) -> bool;

    /// Side to move.
    fn turn(&self) -> Color;

    /// Board snapshot.
    fn board(&self) -> Grid;

    /// Serialize the current position.
    fn fen(&self) -> String;
}

/// Find the square holding the king of `color`, scanning a board snapshot.
#[must_use]
pub fn find_king(grid: &Grid, color: Color) -> Option<Square> {
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if *cell == Some(Piece::new(PieceType::King, color)) {
                #[allow(clippy::cast_possible_truncation)]
                return Square::new(col as u8, 7 - row as u8);
            }
        }
    }
    None
}

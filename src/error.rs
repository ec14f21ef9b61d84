//! Error types for position parsing and configuration loading.
//!
//! The run state machine itself has no error channel: guard failures are
//! silent no-ops. These errors only surface at the crate's edges.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// The string has no piece-placement field at all.
    #[error("empty FEN string")]
    Empty,
    /// The piece-placement field does not describe exactly eight ranks.
    #[error("expected 8 ranks in piece placement, found {0}")]
    RankCount(usize),
    /// A rank does not add up to exactly eight files.
    #[error("rank {rank} describes {files} files")]
    FileCount {
        /// Rank number (1-8) as printed on the board.
        rank: u8,
        /// Number of files the rank text covers.
        files: usize,
    },
    /// An unknown piece letter.
    #[error("invalid piece character {0:?}")]
    Piece(char),
    /// The side-to-move field is not `w` or `b`.
    #[error("invalid side to move {0:?}")]
    Turn(String),
    /// The castling field contains something other than `KQkq` or `-`.
    #[error("invalid castling rights {0:?}")]
    Castling(String),
    /// The en passant field is neither `-` nor a square.
    #[error("invalid en passant square {0:?}")]
    EnPassant(String),
    /// A move counter is not a number.
    #[error("invalid move counter {0:?}")]
    Counter(String),
    /// A side has more than one king.
    #[error("more than one {0} king")]
    DuplicateKing(&'static str),
}

/// Failure to load a run configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for a run configuration.
    #[error("invalid run config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("invalid run config: {0}")]
    Invalid(String),
}

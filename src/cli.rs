//! CLI command implementations for Gambit.

pub(crate) mod play;
pub(crate) mod shop;
pub(crate) mod stage;
pub(crate) mod sweep;

mod output;

use clap::ValueEnum;
use gambit::UnitKind;
use std::error::Error;
use std::fmt;

/// Output format for the `stage` and `shop` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `sweep` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SweepFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<gambit::ConfigError> for CliError {
    fn from(e: gambit::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<gambit::FenError> for CliError {
    fn from(e: gambit::FenError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Parse an army argument such as `"PNQ"`.
pub(crate) fn parse_army(text: &str) -> Result<Vec<UnitKind>, CliError> {
    UnitKind::parse_army(text)
        .map_err(|c| CliError::new(format!("invalid unit {c:?} in army (use P, N, B, R, Q)")))
}

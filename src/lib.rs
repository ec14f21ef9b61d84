// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Gambit: a deterministic roguelike chess run engine.
//!
//! A run is a sequence of rounds. Each round the player's purchased army is
//! deployed onto a generated position against an enemy force bought from a
//! growing budget; checkmating the black king pays gold, which buys more
//! units between rounds.
//!
//! - Every stage and shop is reproducible from `(seed, round)`
//! - Chess rules sit behind the [`rules::RulesEngine`] trait
//! - Run state is owned by [`game::Run`] and changed only through actions
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  CLI / render / sweep               │
//! ├─────────────────────────────────────┤
//! │  Run state machine (game::Run)      │
//! ├──────────────────┬──────────────────┤
//! │  Shop / stage    │  Economy         │
//! ├──────────────────┴──────────────────┤
//! │  Mulberry32 RNG  │  RulesEngine     │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod rng;
pub mod rules;
pub mod sweep;

pub use error::{ConfigError, FenError};

// Re-export key run types at crate root for convenience
pub use game::{BattleOutcome, Phase, Run, RunConfig, RunState, Shop, UnitKind};
pub use rules::{Position, RulesEngine, Square};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_serializes_lowercase() {
        let json = serde_json::to_string(&Phase::GameOver).unwrap();
        assert_eq!(json, "\"gameover\"");
    }

    #[test]
    fn test_state_serializes() {
        let run = Run::new(RunConfig {
            seed: Some(9),
            ..RunConfig::default()
        });
        let json = serde_json::to_value(run.state()).unwrap();
        assert_eq!(json["seed"], 9);
        assert_eq!(json["phase"], "deploy");
        assert_eq!(json["round"], 1);
    }
}

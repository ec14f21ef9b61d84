//! Run invariants - consistency checks that detect bugs.
//!
//! None of these should ever fire for a state reached through [`Run`]
//! actions. Tests, fuzz targets and debug builds of the CLI check them after
//! every action.
//!
//! [`Run`]: crate::game::Run

use crate::game::{Phase, RunState, SHOP_SIZE};
use crate::rules::{Color, Position, RulesEngine, find_king};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all run invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &RunState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });

    if state.army.len() > state.slots {
        fail(format!(
            "army has {} units but only {} slots",
            state.army.len(),
            state.slots
        ));
    }

    if state.round == 0 {
        fail("round is 0".to_string());
    }

    if let Some(shop) = &state.shop {
        if shop.offers.len() > SHOP_SIZE {
            fail(format!("shop has {} offers", shop.offers.len()));
        }
        for (i, a) in shop.offers.iter().enumerate() {
            if shop.offers[i + 1..].iter().any(|b| b.kind == a.kind) {
                fail(format!("shop offers {} twice", a.kind));
            }
        }
    }

    if state.phase == Phase::Shop && state.shop.is_none() {
        fail("shop phase without a shop".to_string());
    }

    match Position::from_fen(&state.fen) {
        Ok(pos) if state.phase != Phase::GameOver => {
            let grid = pos.board();
            for color in [Color::White, Color::Black] {
                if find_king(&grid, color).is_none() {
                    fail(format!("no {color} king while the run is live"));
                }
            }
        }
        Ok(_) => {}
        Err(err) => fail(format!("position {:?} does not parse: {err}", state.fen)),
    }

    violations
}

/// Assert all run invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &RunState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Run invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &RunState) {}

//! Gold economy: bounties, round bonus, interest and unit prices.
//!
//! Victory payout for a round:
//!
//! raw = gold + sum(bounty of each kill) + round_bonus(round) + STREAK_BONUS
//!
//! and the new gold is `raw` plus interest, where interest is 10% of `raw`
//! rounded down and capped at the run's interest cap. The cap keeps long
//! runs from compounding away.

use serde::Serialize;

use crate::game::UnitKind;
use crate::rules::PieceType;

/// Flat bonus added to every victory payout.
pub const STREAK_BONUS: u32 = 1;

/// Default cap on interest earned per victory.
pub const DEFAULT_INTEREST_CAP: u32 = 3;

/// Default number of army slots.
pub const DEFAULT_SLOTS: usize = 3;

/// Interest rate as a divisor: 10% is `gold / 10`.
const INTEREST_DIVISOR: u32 = 10;

/// Shop prices for each purchasable kind, in [`UnitKind::ALL`] order.
pub const PRICES: [(UnitKind, u32); 5] = [
    (UnitKind::Pawn, 3),
    (UnitKind::Knight, 7),
    (UnitKind::Bishop, 7),
    (UnitKind::Rook, 12),
    (UnitKind::Queen, 20),
];

/// Gold awarded for capturing an enemy piece of the given kind.
#[must_use]
pub const fn bounty_of(kind: PieceType) -> u32 {
    match kind {
        PieceType::Pawn => 1,
        PieceType::Knight | PieceType::Bishop => 3,
        PieceType::Rook | PieceType::King => 5,
        PieceType::Queen => 9,
    }
}

/// Shop price of a unit kind.
#[must_use]
pub const fn price_of(kind: UnitKind) -> u32 {
    match kind {
        UnitKind::Pawn => 3,
        UnitKind::Knight | UnitKind::Bishop => 7,
        UnitKind::Rook => 12,
        UnitKind::Queen => 20,
    }
}

/// Per-round victory bonus: `2 + round / 3`.
#[must_use]
pub const fn round_bonus(round: u32) -> u32 {
    2 + round / 3
}

/// Interest earned on a gold total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interest {
    /// Interest added.
    pub interest: u32,
    /// Gold after interest.
    pub total: u32,
}

/// Apply capped 10% interest to `gold`.
#[must_use]
pub const fn apply_interest(gold: u32, cap: u32) -> Interest {
    let raw = gold / INTEREST_DIVISOR;
    let interest = if raw < cap { raw } else { cap };
    Interest {
        interest,
        total: gold.saturating_add(interest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounty_table() {
        assert_eq!(bounty_of(PieceType::Pawn), 1);
        assert_eq!(bounty_of(PieceType::Knight), 3);
        assert_eq!(bounty_of(PieceType::Bishop), 3);
        assert_eq!(bounty_of(PieceType::Rook), 5);
        assert_eq!(bounty_of(PieceType::Queen), 9);
        assert_eq!(bounty_of(PieceType::King), 5);
    }

    #[test]
    fn test_price_table_matches_price_of() {
        for (kind, price) in PRICES {
            assert_eq!(price_of(kind), price);
        }
        let kinds: Vec<_> = PRICES.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, UnitKind::ALL);
    }

    #[test]
    fn test_round_bonus() {
        assert_eq!(round_bonus(1), 2);
        assert_eq!(round_bonus(2), 2);
        assert_eq!(round_bonus(3), 3);
        assert_eq!(round_bonus(9), 5);
    }

    #[test]
    fn test_interest_below_cap() {
        assert_eq!(apply_interest(0, 3), Interest { interest: 0, total: 0 });
        assert_eq!(apply_interest(9, 3), Interest { interest: 0, total: 9 });
        assert_eq!(apply_interest(28, 3), Interest { interest: 2, total: 30 });
    }

    #[test]
    fn test_interest_capped() {
        assert_eq!(apply_interest(100, 3), Interest { interest: 3, total: 103 });
        assert_eq!(apply_interest(100, 0), Interest { interest: 0, total: 100 });
    }

    #[test]
    fn test_interest_saturates() {
        assert_eq!(apply_interest(u32::MAX, 3).total, u32::MAX);
    }
}

/// Kani proofs for economy arithmetic.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Interest never exceeds the cap and total never drops below gold.
    #[kani::proof]
    fn prove_interest_bounded() {
        let gold: u32 = kani::any();
        let cap: u32 = kani::any();

        let result = apply_interest(gold, cap);

        assert!(result.interest <= cap);
        assert!(result.total >= gold);
    }

    /// Round bonus is non-decreasing.
    #[kani::proof]
    fn prove_round_bonus_monotonic() {
        let round: u32 = kani::any();
        kani::assume(round < u32::MAX);

        assert!(round_bonus(round + 1) >= round_bonus(round));
    }
}

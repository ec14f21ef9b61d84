//! Shop generation.
//!
//! Offers are drawn by inverse-CDF sampling over a fixed kind distribution,
//! discarding repeats until the shop holds [`SHOP_SIZE`] distinct kinds.

use tracing::debug;

use crate::game::{IdSequence, Offer, Shop, UnitKind, price_of};
use crate::rng::Mulberry32;

/// Number of offers in a fresh shop.
pub const SHOP_SIZE: usize = 3;

/// Reroll cost of a freshly generated shop.
pub const BASE_REROLL_COST: u32 = 2;

/// Draw cap before the remaining slots are filled deterministically.
const MAX_DRAWS: usize = 256;

/// Offer probability per kind, in table order.
const DISTRIBUTION: [(UnitKind, f64); 5] = [
    (UnitKind::Pawn, 0.50),
    (UnitKind::Knight, 0.125),
    (UnitKind::Bishop, 0.125),
    (UnitKind::Rook, 0.20),
    (UnitKind::Queen, 0.05),
];

/// Sample one kind: first kind whose cumulative mass reaches the draw.
fn weighted_pick(rng: &mut Mulberry32) -> UnitKind {
    let r = rng.next_f64();
    let mut acc = 0.0;
    for (kind, p) in DISTRIBUTION {
        acc += p;
        if r <= acc {
            return kind;
        }
    }
    UnitKind::Pawn
}

/// Generate a shop of distinct-kind offers.
///
/// Ids come from `ids`, so two shops generated from identical RNG and id
/// states are identical.
pub fn gen_shop(rng: &mut Mulberry32, ids: &mut IdSequence) -> Shop {
    let mut kinds: Vec<UnitKind> = Vec::with_capacity(SHOP_SIZE);
    let mut draws = 0;

    while kinds.len() < SHOP_SIZE && draws < MAX_DRAWS {
        draws += 1;
        let kind = weighted_pick(rng);
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.len() < SHOP_SIZE {
        debug!(draws, "shop sampling hit draw cap, filling in table order");
        for kind in UnitKind::ALL {
            if kinds.len() == SHOP_SIZE {
                break;
            }
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
    }

    let offers = kinds
        .into_iter()
        .map(|kind| Offer {
            id: ids.mint(),
            kind,
            price: price_of(kind),
        })
        .collect();

    Shop {
        offers,
        reroll_cost: BASE_REROLL_COST,
    }
}

/// Stream for the shop offered after winning `round`.
#[must_use]
pub const fn victory_shop_rng(seed: u32, round: u32) -> Mulberry32 {
    Mulberry32::new(seed.wrapping_add(round.wrapping_mul(97)))
}

/// Stream for a reroll during the shop of `round`.
#[must_use]
pub const fn reroll_shop_rng(seed: u32, round: u32) -> Mulberry32 {
    Mulberry32::new(seed.wrapping_add(round.wrapping_mul(13)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_has_three_distinct_kinds() {
        for seed in 0..500 {
            let mut rng = Mulberry32::new(seed);
            let mut ids = IdSequence::new();
            let shop = gen_shop(&mut rng, &mut ids);

            assert_eq!(shop.offers.len(), SHOP_SIZE);
            assert_eq!(shop.reroll_cost, BASE_REROLL_COST);
            for (i, a) in shop.offers.iter().enumerate() {
                assert_eq!(a.price, price_of(a.kind));
                for b in &shop.offers[i + 1..] {
                    assert_ne!(a.kind, b.kind);
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn test_shop_deterministic() {
        let a = gen_shop(&mut victory_shop_rng(42, 1), &mut IdSequence::new());
        let b = gen_shop(&mut victory_shop_rng(42, 1), &mut IdSequence::new());
        assert_eq!(a, b);
    }

    #[test]
    fn test_weighted_pick_favors_pawns() {
        let mut rng = Mulberry32::new(7);
        let pawns = (0..10_000)
            .filter(|_| weighted_pick(&mut rng) == UnitKind::Pawn)
            .count();
        // Expected 5000.
        assert!((4500..5500).contains(&pawns), "pawns = {pawns}");
    }

    #[test]
    fn test_rng_derivations_wrap() {
        let mut a = victory_shop_rng(u32::MAX, 1);
        let mut b = Mulberry32::new(96);
        assert_eq!(a.next_u32(), b.next_u32());

        let mut a = reroll_shop_rng(10, 2);
        let mut b = Mulberry32::new(36);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}

//! Stage generation: the starting position of each battle.
//!
//! A stage is a pure function of `(seed, round, army)`:
//!
//! 1. Kings on e1 and e8.
//! 2. The army on shuffled empty squares of ranks 1 and 2. Units that do not
//!    fit are dropped. Round 1 without a pawn in the army gets a pawn on e2.
//! 3. Enemies on shuffled squares of ranks 3 to 8 (minus d8, e8, f8), each
//!    kind drawn from [`ENEMY_POOL`] by weight, while the round's budget
//!    allows. A placement that puts the white king in check is undone.
//! 4. If budget is left and white is not in check, one black pawn on the
//!    first free square of d7, e7, f7.

use serde::Serialize;
use tracing::{debug, trace};

use crate::game::UnitKind;
use crate::rng::Mulberry32;
use crate::rules::{Piece, PieceType, Position, RulesEngine, Square, squares};

/// A generated battle position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    /// Starting position, white to move.
    pub fen: String,
    /// Enemy budget actually spent.
    pub budget_used: u32,
}

/// Enemy kind available to stage generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolEntry {
    /// Piece kind.
    pub kind: PieceType,
    /// Budget cost.
    pub cost: u32,
    /// Relative sampling weight.
    pub weight: f64,
}

/// Enemy pool in sampling order.
pub const ENEMY_POOL: [PoolEntry; 5] = [
    PoolEntry { kind: PieceType::Pawn, cost: 2, weight: 3.0 },
    PoolEntry { kind: PieceType::Knight, cost: 6, weight: 2.0 },
    PoolEntry { kind: PieceType::Bishop, cost: 6, weight: 2.0 },
    PoolEntry { kind: PieceType::Rook, cost: 10, weight: 1.2 },
    PoolEntry { kind: PieceType::Queen, cost: 16, weight: 0.8 },
];

/// Squares next to the black king kept free of enemies.
const KING_ZONE: [Square; 3] = [squares::D8, squares::E8, squares::F8];

/// Squares tried, in order, for the extra black pawn.
const NUDGE_SQUARES: [Square; 3] = [squares::D7, squares::E7, squares::F7];

/// Enemy budget for a round.
///
/// Rounds 1 to 5 use a fixed table; later rounds follow
/// `round(6 + 4r + 0.8r^2)`. The two do not meet at round 6.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn enemy_budget(round: u32) -> u32 {
    match round {
        0 | 1 => 0,
        2 => 8,
        3 => 12,
        4 => 18,
        5 => 24,
        _ => {
            let r = f64::from(round);
            (6.0 + 4.0 * r + 0.8 * r * r).round() as u32
        }
    }
}

fn is_player_zone(sq: Square) -> bool {
    sq.rank() <= 1
}

/// Cumulative-weight draw over [`ENEMY_POOL`].
fn weighted_enemy(rng: &mut Mulberry32) -> Option<PoolEntry> {
    let total: f64 = ENEMY_POOL.iter().map(|p| p.weight).sum();
    let mut r = rng.next_f64() * total;
    for entry in ENEMY_POOL {
        r -= entry.weight;
        if r <= 0.0 {
            return Some(entry);
        }
    }
    None
}

/// Generate the stage for `round` with the standard rules engine.
#[must_use]
pub fn gen_stage(seed: u32, round: u32, army: &[UnitKind]) -> Stage {
    gen_stage_with(&mut Position::empty(), seed, round, army)
}

/// Generate the stage for `round` using `engine` as scratch board.
///
/// The engine's previous position is discarded.
pub fn gen_stage_with<R: RulesEngine + ?Sized>(
    engine: &mut R,
    seed: u32,
    round: u32,
    army: &[UnitKind],
) -> Stage {
    let mut rng = Mulberry32::for_round(seed, round);
    engine.clear();
    engine.put(Piece::white(PieceType::King), squares::E1);
    engine.put(Piece::black(PieceType::King), squares::E8);

    let mut home: Vec<Square> = Square::all()
        .filter(|&sq| is_player_zone(sq) && engine.get(sq).is_none())
        .collect();
    rng.shuffle(&mut home);

    for kind in army {
        let Some(sq) = home.pop() else {
            trace!(unit = %kind, "home ranks full, unit dropped");
            break;
        };
        engine.put(Piece::white(kind.piece_type()), sq);
    }

    if round == 1 && !army.contains(&UnitKind::Pawn) {
        engine.put(Piece::white(PieceType::Pawn), squares::E2);
    }

    let budget = enemy_budget(round);
    let mut used = 0;

    let mut candidates: Vec<Square> = Square::all()
        .filter(|&sq| !is_player_zone(sq) && !KING_ZONE.contains(&sq) && engine.get(sq).is_none())
        .collect();
    rng.shuffle(&mut candidates);

    for sq in candidates {
        let Some(pick) = weighted_enemy(&mut rng) else {
            continue;
        };
        if used + pick.cost > budget {
            continue;
        }

        engine.put(Piece::black(pick.kind), sq);
        if engine.is_check() {
            trace!(square = %sq, kind = ?pick.kind, "placement gives check, undone");
            engine.remove(sq);
            continue;
        }

        used += pick.cost;
        if used >= budget {
            break;
        }
    }

    if !engine.is_check()
        && used < budget
        && let Some(sq) = NUDGE_SQUARES.into_iter().find(|&sq| engine.get(sq).is_none())
    {
        engine.put(Piece::black(PieceType::Pawn), sq);
    }

    let fen = engine.fen();
    debug!(seed, round, budget, used, fen = %fen, "stage generated");
    Stage { fen, budget_used: used }
}

//! Run orchestration for Gambit.
//!
//! Everything between battles lives here:
//! - Units, offers and the shop generator
//! - Economy (bounties, round bonus, capped interest)
//! - Stage generation under a per-round enemy budget
//! - Kill diffing between positions
//! - The run state machine and its configuration

mod config;
mod economy;
mod invariants;
mod kills;
mod run;
mod shop;
mod stage;
mod unit;

pub use config::{MAX_SLOTS, RunConfig};
pub use economy::{
    DEFAULT_INTEREST_CAP, DEFAULT_SLOTS, Interest, PRICES, STREAK_BONUS, apply_interest,
    bounty_of, price_of, round_bonus,
};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use kills::list_kills;
pub use run::{BattleOutcome, BattleReport, MoveReport, Phase, Run, RunState};
pub use shop::{BASE_REROLL_COST, SHOP_SIZE, gen_shop, reroll_shop_rng, victory_shop_rng};
pub use stage::{ENEMY_POOL, PoolEntry, Stage, enemy_budget, gen_stage, gen_stage_with};
pub use unit::{ArmySlot, IdSequence, Offer, Shop, UnitId, UnitKind};

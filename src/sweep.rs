//! Balance sweep: stage generation statistics over many seeds.
//!
//! For every seed in a range and every round up to a limit, generate the
//! stage for a fixed army and record how much of the enemy budget was spent
//! and how many enemy pieces landed. Seeds are processed in parallel with a
//! lock-free fold/reduce: each rayon worker accumulates its own
//! [`SweepStats`], merged at the end.

// Means and ratios over sample counts.
#![allow(clippy::cast_precision_loss)]

use rayon::prelude::*;
use serde::Serialize;

use crate::game::{UnitKind, enemy_budget, gen_stage_with};
use crate::rules::{Color, Position};

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// First seed.
    pub base_seed: u32,
    /// Number of consecutive seeds.
    pub seeds: u32,
    /// Rounds 1 through this value are generated per seed.
    pub rounds: u32,
    /// Army deployed in every stage.
    pub army: Vec<UnitKind>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base_seed: 0,
            seeds: 1_000,
            rounds: 10,
            army: Vec::new(),
        }
    }
}

/// Aggregates for one round across all seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundStats {
    /// Round number.
    pub round: u32,
    /// Enemy budget for the round.
    pub budget: u32,
    /// Stages sampled.
    pub samples: u64,
    /// Sum of budget spent.
    pub used_total: u64,
    /// Smallest budget spent by any stage.
    pub used_min: u32,
    /// Largest budget spent by any stage.
    pub used_max: u32,
    /// Sum of black pieces besides the king.
    pub enemies_total: u64,
}

impl RoundStats {
    fn new(round: u32) -> Self {
        Self {
            round,
            budget: enemy_budget(round),
            samples: 0,
            used_total: 0,
            used_min: u32::MAX,
            used_max: 0,
            enemies_total: 0,
        }
    }

    fn record(&mut self, used: u32, enemies: usize) {
        self.samples += 1;
        self.used_total += u64::from(used);
        self.used_min = self.used_min.min(used);
        self.used_max = self.used_max.max(used);
        self.enemies_total += enemies as u64;
    }

    fn merge(&mut self, other: &Self) {
        self.samples += other.samples;
        self.used_total += other.used_total;
        self.used_min = self.used_min.min(other.used_min);
        self.used_max = self.used_max.max(other.used_max);
        self.enemies_total += other.enemies_total;
    }

    /// Mean budget spent per stage.
    #[must_use]
    pub fn mean_used(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.used_total as f64 / self.samples as f64
        }
    }

    /// Mean enemy pieces per stage.
    #[must_use]
    pub fn mean_enemies(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.enemies_total as f64 / self.samples as f64
        }
    }

    /// Mean fraction of the budget spent, 1.0 for a zero budget.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.budget == 0 {
            1.0
        } else {
            self.mean_used() / f64::from(self.budget)
        }
    }

    /// Smallest spend, 0 when nothing was sampled.
    #[must_use]
    pub const fn min_used(&self) -> u32 {
        if self.samples == 0 { 0 } else { self.used_min }
    }
}

/// Per-round aggregates of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepStats {
    /// Seeds processed.
    pub seeds: u64,
    /// One entry per round, starting at round 1.
    pub rounds: Vec<RoundStats>,
}

impl SweepStats {
    /// Empty statistics for rounds `1..=rounds`.
    #[must_use]
    pub fn new(rounds: u32) -> Self {
        Self {
            seeds: 0,
            rounds: (1..=rounds).map(RoundStats::new).collect(),
        }
    }

    /// Generate every round for one seed and record it.
    pub fn add_seed(&mut self, seed: u32, army: &[UnitKind]) {
        let mut scratch = Position::empty();
        for stats in &mut self.rounds {
            let stage = gen_stage_with(&mut scratch, seed, stats.round, army);
            stats.record(stage.budget_used, enemy_count(&scratch));
        }
        self.seeds += 1;
    }

    /// Merge another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        self.seeds += other.seeds;
        for (mine, theirs) in self.rounds.iter_mut().zip(&other.rounds) {
            mine.merge(theirs);
        }
    }
}

fn enemy_count(pos: &Position) -> usize {
    // Every generated stage has a black king.
    pos.piece_count(Color::Black).saturating_sub(1)
}

/// Run a sweep in parallel.
#[must_use]
pub fn run_sweep(config: &SweepConfig) -> SweepStats {
    (0..config.seeds)
        .into_par_iter()
        .fold(
            || SweepStats::new(config.rounds),
            |mut local, i| {
                local.add_seed(config.base_seed.wrapping_add(i), &config.army);
                local
            },
        )
        .reduce(
            || SweepStats::new(config.rounds),
            |mut a, b| {
                a.merge(&b);
                a
            },
        )
}

//! Output formatting utilities for CLI.

// Means and ratios over sample counts.
#![allow(clippy::cast_precision_loss)]

use gambit::game::{Shop, Stage};
use gambit::sweep::SweepStats;
use serde::Serialize;

/// JSON-serializable stage.
#[derive(Debug, Serialize)]
pub(super) struct JsonStage<'a> {
    /// Run seed.
    pub(super) seed: u32,
    /// Round number.
    pub(super) round: u32,
    /// Army letters in deploy order.
    pub(super) army: String,
    /// Enemy budget for the round.
    pub(super) budget: u32,
    /// Generated stage.
    #[serde(flatten)]
    pub(super) stage: &'a Stage,
}

/// JSON-serializable shop.
#[derive(Debug, Serialize)]
pub(super) struct JsonShop<'a> {
    /// Run seed.
    pub(super) seed: u32,
    /// Round number.
    pub(super) round: u32,
    /// Whether this is the reroll shop.
    pub(super) reroll: bool,
    /// Generated shop.
    #[serde(flatten)]
    pub(super) shop: &'a Shop,
}

/// Format a shop as human-readable text.
pub(super) fn format_shop_text(shop: &Shop) -> String {
    let mut output = String::new();
    for offer in &shop.offers {
        output.push_str(&format!("  {} {:<7} {:>3} gold\n", offer.id, offer.kind, offer.price));
    }
    output.push_str(&format!("  reroll: {} gold\n", shop.reroll_cost));
    output
}

/// JSON-serializable sweep result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSweepResult {
    /// Seeds processed.
    seeds: u64,
    /// Per-round statistics.
    rounds: Vec<JsonSweepRound>,
}

/// JSON-serializable per-round sweep stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonSweepRound {
    /// Round number.
    round: u32,
    /// Enemy budget.
    budget: u32,
    /// Mean budget spent.
    mean_used: f64,
    /// Smallest spend.
    min_used: u32,
    /// Largest spend.
    max_used: u32,
    /// Mean enemy pieces.
    mean_enemies: f64,
    /// Mean spend over budget.
    utilization: f64,
}

impl JsonSweepResult {
    /// Create from sweep statistics.
    pub(super) fn from_stats(stats: &SweepStats) -> Self {
        Self {
            seeds: stats.seeds,
            rounds: stats
                .rounds
                .iter()
                .map(|r| JsonSweepRound {
                    round: r.round,
                    budget: r.budget,
                    mean_used: r.mean_used(),
                    min_used: r.min_used(),
                    max_used: r.used_max,
                    mean_enemies: r.mean_enemies(),
                    utilization: r.utilization(),
                })
                .collect(),
        }
    }
}

/// Format sweep statistics as human-readable text.
pub(super) fn format_sweep_text(stats: &SweepStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Stage sweep ({} seeds)\n", stats.seeds));
    output.push_str(&"=".repeat(66));
    output.push('\n');
    output.push_str(&format!(
        "{:>5} {:>7} {:>10} {:>6} {:>6} {:>12} {:>10}\n",
        "Round", "Budget", "Mean used", "Min", "Max", "Mean enemies", "Util %"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for r in &stats.rounds {
        output.push_str(&format!(
            "{:>5} {:>7} {:>10.2} {:>6} {:>6} {:>12.2} {:>9.1}%\n",
            r.round,
            r.budget,
            r.mean_used(),
            r.min_used(),
            r.used_max,
            r.mean_enemies(),
            r.utilization() * 100.0
        ));
    }

    output
}

/// Format sweep statistics as CSV.
pub(super) fn format_sweep_csv(stats: &SweepStats) -> String {
    let mut output = String::new();

    output.push_str("round,budget,samples,mean_used,min_used,max_used,mean_enemies,utilization\n");
    for r in &stats.rounds {
        output.push_str(&format!(
            "{},{},{},{:.4},{},{},{:.4},{:.4}\n",
            r.round,
            r.budget,
            r.samples,
            r.mean_used(),
            r.min_used(),
            r.used_max,
            r.mean_enemies(),
            r.utilization()
        ));
    }

    output
}

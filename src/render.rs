//! Plain-text presentation of a run.
//!
//! Consumes a [`BoardView`] (FEN and board, selection, legal targets) and the
//! [`RunState`], producing terminal-friendly strings. Nothing here mutates
//! state.

// format! with push_str reads better here; the allocations are negligible.
#![allow(clippy::format_push_string)]

use crate::game::{BattleReport, Phase, RunState};
use crate::rules::{Grid, Square};

/// What a board presenter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Position as FEN.
    pub fen: String,
    /// Board snapshot of the same position, row 0 = rank 8.
    pub grid: Grid,
    /// Currently selected square.
    pub selected: Option<Square>,
    /// Legal destinations of the selected piece.
    pub legal_targets: Vec<Square>,
}

/// Render the board with rank and file labels.
///
/// Pieces use FEN letters. The selected square is wrapped in brackets, a
/// legal target shows `*` when empty or `x` before a capturable piece.
///
/// ```text
/// 8  .  .  .  .  k  .  .  .
/// ...
/// 2  .  .  .  . [P] .  .  .
/// 1  .  .  .  .  K  .  .  .
///    a  b  c  d  e  f  g  h
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn render_board(view: &BoardView) -> String {
    let mut output = String::new();

    for (row, cells) in view.grid.iter().enumerate() {
        let rank = 7 - row as u8;
        output.push_str(&format!("{} ", rank + 1));
        for (col, cell) in cells.iter().enumerate() {
            let sq = Square::new(col as u8, rank);
            let glyph = cell.map_or('.', |p| p.fen_char());
            let target = sq.is_some_and(|s| view.legal_targets.contains(&s));
            let cell_text = if sq.is_some() && sq == view.selected {
                format!("[{glyph}]")
            } else if target && cell.is_some() {
                format!("x{glyph} ")
            } else if target {
                " * ".to_string()
            } else {
                format!(" {glyph} ")
            };
            output.push_str(&cell_text);
        }
        output.push('\n');
    }
    output.push_str("   a  b  c  d  e  f  g  h\n");

    output
}

/// Render the status line block: round, gold, phase, army, shop and the
/// most recent payout.
#[must_use]
pub fn render_hud(state: &RunState) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Round {} | Gold {} | Phase {} | Seed {}\n",
        state.round,
        state.gold,
        phase_name(state.phase),
        state.seed
    ));

    let army: Vec<String> = state.army.iter().map(|slot| slot.kind.to_string()).collect();
    output.push_str(&format!(
        "Army ({}/{}): {}\n",
        state.army.len(),
        state.slots,
        if army.is_empty() {
            "-".to_string()
        } else {
            army.join(", ")
        }
    ));

    if state.phase == Phase::Battle {
        output.push_str(&format!("Enemy budget spent: {}\n", state.budget_used));
    }

    if let Some(report) = &state.last_report {
        render_report(&mut output, report);
    }

    if let Some(shop) = &state.shop {
        output.push_str(&format!("Shop (reroll {}):\n", shop.reroll_cost));
        if shop.offers.is_empty() {
            output.push_str("  sold out\n");
        }
        for offer in &shop.offers {
            output.push_str(&format!(
                "  {} {} for {} gold\n",
                offer.id, offer.kind, offer.price
            ));
        }
    }

    output
}

fn render_report(output: &mut String, report: &BattleReport) {
    let kills: Vec<String> = report.kills.iter().map(|k| k.letter().to_string()).collect();
    output.push_str(&format!(
        "Round {} won: kills [{}] bounty {} + bonus {} + streak {} + interest {} -> {} gold\n",
        report.round,
        kills.join(" "),
        report.bounty,
        report.round_bonus,
        report.streak_bonus,
        report.interest,
        report.gold
    ));
}

/// Lowercase phase name.
#[must_use]
pub const fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Deploy => "deploy",
        Phase::Battle => "battle",
        Phase::Shop => "shop",
        Phase::GameOver => "gameover",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{RunConfig, UnitKind};
    use crate::rules::{Position, RulesEngine};

    fn view(fen: &str, selected: Option<&str>, targets: &[&str]) -> BoardView {
        BoardView {
            fen: fen.to_string(),
            grid: Position::from_fen(fen).unwrap().board(),
            selected: selected.and_then(Square::parse),
            legal_targets: targets.iter().filter_map(|t| Square::parse(t)).collect(),
        }
    }

    #[test]
    fn test_render_board_layout() {
        let text = render_board(&view("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", None, &[]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  .  .  .  .  k  .  .  . ");
        assert_eq!(lines[6], "2  .  .  .  .  P  .  .  . ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
    }

    #[test]
    fn test_render_board_selection_and_targets() {
        let text = render_board(&view(
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            Some("e2"),
            &["e3", "e4"],
        ));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[6].contains("[P]"));
        assert!(lines[5].contains(" * "));
        assert!(lines[4].contains(" * "));
    }

    #[test]
    fn test_render_board_capture_marker() {
        let text = render_board(&view("4k3/8/8/8/8/3p4/4P3/4K3 w - - 0 1", Some("e2"), &["d3"]));
        assert!(text.lines().nth(5).unwrap().contains("xp"));
    }

    #[test]
    fn test_render_hud() {
        let mut state = RunState::initial(42, &RunConfig::default());
        state.gold = 12;
        state.army.push(crate::game::ArmySlot {
            id: crate::game::UnitId(1),
            kind: UnitKind::Knight,
        });
        let text = render_hud(&state);
        assert!(text.contains("Round 1 | Gold 12 | Phase deploy | Seed 42"));
        assert!(text.contains("Army (1/3): knight"));
        assert!(!text.contains("Shop"));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(phase_name(Phase::GameOver), "gameover");
        assert_eq!(phase_name(Phase::Deploy), "deploy");
    }
}

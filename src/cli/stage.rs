//! Stage command implementation.

use super::output::JsonStage;
use super::{CliError, OutputFormat, parse_army};
use gambit::game::{enemy_budget, gen_stage};
use gambit::render::{BoardView, render_board};
use gambit::{Position, RulesEngine};

/// Execute the stage command.
///
/// # Errors
///
/// Returns an error if the army string is invalid.
pub(crate) fn execute(
    seed: u32,
    round: u32,
    army: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    if round == 0 {
        return Err(CliError::new("rounds start at 1"));
    }
    let kinds = parse_army(army)?;
    let stage = gen_stage(seed, round, &kinds);
    let budget = enemy_budget(round);

    match format {
        OutputFormat::Text => {
            let pos = Position::from_fen(&stage.fen)?;
            println!("Stage seed {seed}, round {round}");
            println!("Budget {budget}, spent {}", stage.budget_used);
            println!();
            print!(
                "{}",
                render_board(&BoardView {
                    fen: stage.fen.clone(),
                    grid: pos.board(),
                    selected: None,
                    legal_targets: Vec::new(),
                })
            );
            println!();
            println!("{}", stage.fen);
        }
        OutputFormat::Json => {
            let json = JsonStage {
                seed,
                round,
                army: kinds.iter().map(|k| k.letter()).collect(),
                budget,
                stage: &stage,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

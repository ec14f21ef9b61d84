//! Shop command implementation.

use super::output::{JsonShop, format_shop_text};
use super::{CliError, OutputFormat};
use gambit::game::{IdSequence, gen_shop, reroll_shop_rng, victory_shop_rng};

/// Execute the shop command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(
    seed: u32,
    round: u32,
    reroll: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut rng = if reroll {
        reroll_shop_rng(seed, round)
    } else {
        victory_shop_rng(seed, round)
    };
    let shop = gen_shop(&mut rng, &mut IdSequence::new());

    match format {
        OutputFormat::Text => {
            let kind = if reroll { "Reroll" } else { "Victory" };
            println!("{kind} shop, seed {seed}, round {round}");
            print!("{}", format_shop_text(&shop));
        }
        OutputFormat::Json => {
            let json = JsonShop {
                seed,
                round,
                reroll,
                shop: &shop,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

//! Sweep command implementation.

use super::output::{JsonSweepResult, format_sweep_csv, format_sweep_text};
use super::{CliError, SweepFormat, parse_army};
use gambit::sweep::{SweepConfig, run_sweep};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Execute the sweep command.
///
/// # Errors
///
/// Returns an error if the army is invalid or output fails.
pub(crate) fn execute(
    seeds: u32,
    seed: u32,
    rounds: u32,
    army: &str,
    threads: Option<usize>,
    format: SweepFormat,
    progress: bool,
) -> Result<(), CliError> {
    let config = SweepConfig {
        base_seed: seed,
        seeds,
        rounds,
        army: parse_army(army)?,
    };

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let pb = if progress {
        let pb = ProgressBar::new(u64::from(seeds));
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} seeds")
            .map_err(|e| CliError::new(format!("progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_sweep(&config);

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(stats.seeds);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    #[allow(clippy::cast_precision_loss)]
    let stages_per_sec = if duration.as_secs_f64() > 0.0 {
        (stats.seeds * u64::from(rounds)) as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SweepFormat::Text => {
            print!("{}", format_sweep_text(&stats));
            println!();
            println!(
                "Duration: {:.2}s ({stages_per_sec:.0} stages/sec)",
                duration.as_secs_f64()
            );
        }
        SweepFormat::Json => {
            let json = JsonSweepResult::from_stats(&stats);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        SweepFormat::Csv => {
            print!("{}", format_sweep_csv(&stats));
        }
    }

    Ok(())
}

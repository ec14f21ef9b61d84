//! Play command implementation: a line-oriented interactive run.

use super::CliError;
use gambit::game::{BattleOutcome, MoveReport, Phase, Run, RunConfig, UnitId, assert_invariants};
use gambit::render::{phase_name, render_board, render_hud};
use gambit::{RulesEngine, Square};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  fight              start the battle (deploy phase)
  e2e4 | e2 e4       move a piece (battle phase)
  sel e2             show legal targets of a piece
  buy <id>           buy an offer (shop)
  reroll             reroll the shop
  next               go to the next round (shop phase)
  new                restart the run with the same seed
  board              show the board and status
  state              dump the run state as JSON
  quit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Help,
    Fight,
    Move(Square, Square),
    Select(Square),
    Buy(UnitId),
    Reroll,
    Next,
    New,
    Board,
    State,
    Quit,
}

fn square(text: &str) -> Result<Square, String> {
    text.parse()
}

impl Input {
    fn parse(line: &str) -> Result<Self, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["help" | "?"] => Ok(Self::Help),
            ["fight" | "battle"] => Ok(Self::Fight),
            ["sel" | "select", sq] => Ok(Self::Select(square(sq)?)),
            ["buy", id] => id
                .trim_start_matches('#')
                .parse()
                .map(|n| Self::Buy(UnitId(n)))
                .map_err(|_| format!("invalid offer id {id:?}")),
            ["reroll"] => Ok(Self::Reroll),
            ["next"] => Ok(Self::Next),
            ["new"] => Ok(Self::New),
            ["board" | "b"] => Ok(Self::Board),
            ["state"] => Ok(Self::State),
            ["quit" | "q" | "exit"] => Ok(Self::Quit),
            [from, to] => Ok(Self::Move(square(from)?, square(to)?)),
            [mv] if mv.len() == 4 && mv.is_ascii() => {
                Ok(Self::Move(square(&mv[..2])?, square(&mv[2..])?))
            }
            _ => Err(format!("unknown command {line:?}, try help")),
        }
    }
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or I/O fails.
pub(crate) fn execute(
    seed: Option<u32>,
    config: Option<PathBuf>,
    slots: Option<usize>,
    interest_cap: Option<u32>,
) -> Result<(), CliError> {
    let mut run_config = match config {
        Some(path) => RunConfig::load(&path)?,
        None => RunConfig::default(),
    };
    if seed.is_some() {
        run_config.seed = seed;
    }
    if let Some(slots) = slots {
        run_config.slots = slots;
    }
    if let Some(cap) = interest_cap {
        run_config.interest_cap = cap;
    }
    run_config.validate()?;

    let mut run = Run::new(run_config);
    println!("Gambit run, seed {}. Type help for commands.", run.state().seed);
    print!("{}", render_hud(run.state()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}> ", phase_name(run.phase()));
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let input = match Input::parse(&line) {
            Ok(input) => input,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        if input == Input::Quit {
            break;
        }
        handle(&mut run, input)?;
        assert_invariants(run.state());
    }

    Ok(())
}

fn handle(run: &mut Run, input: Input) -> Result<(), CliError> {
    match input {
        Input::Help => println!("{HELP}"),
        Input::Fight => {
            if run.start_battle() {
                show_board(run, None);
            } else {
                println!("battles start from the deploy phase");
            }
        }
        Input::Move(from, to) => match run.on_move(from, to) {
            Some(report) => {
                announce(run, &report);
                if report.outcome.is_none()
                    && let Some(reply) = run.make_ai_move()
                {
                    announce(run, &reply);
                }
                if run.phase() == Phase::Battle {
                    show_board(run, None);
                }
            }
            None => println!("illegal move"),
        },
        Input::Select(sq) => show_board(run, Some(sq)),
        Input::Buy(id) => {
            if run.buy_offer(id) {
                print!("{}", render_hud(run.state()));
            } else {
                println!("cannot buy {id}: check the shop, your gold and free slots");
            }
        }
        Input::Reroll => {
            if run.reroll_shop() {
                print!("{}", render_hud(run.state()));
            } else {
                println!("cannot reroll");
            }
        }
        Input::Next => {
            if run.next_round_from_victory() {
                print!("{}", render_hud(run.state()));
            } else {
                println!("win the battle first");
            }
        }
        Input::New => {
            run.start_run();
            print!("{}", render_hud(run.state()));
        }
        Input::Board => show_board(run, None),
        Input::State => println!("{}", serde_json::to_string_pretty(run.state())?),
        Input::Quit => {}
    }
    Ok(())
}

fn announce(run: &Run, report: &MoveReport) {
    let side = run.engine().turn().opposite();
    println!("{side} plays {}", report.played);
    match &report.outcome {
        Some(BattleOutcome::Victory(payout)) => {
            println!("Checkmate! {} gold.", payout.gold);
            print!("{}", render_hud(run.state()));
        }
        Some(BattleOutcome::Defeat) => println!("Defeat. Type new to start over."),
        Some(BattleOutcome::Stalemate) => println!("Stalemate. Type new to start over."),
        None => {}
    }
}

fn show_board(run: &Run, selected: Option<Square>) {
    print!("{}", render_board(&run.board_view(selected)));
    print!("{}", render_hud(run.state()));
}

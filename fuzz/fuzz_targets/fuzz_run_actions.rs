#![no_main]

use arbitrary::Arbitrary;
use gambit::game::{Run, RunConfig, UnitId, check_invariants};
use gambit::RulesEngine;
use libfuzzer_sys::fuzz_target;

/// One player action; indices pick among what is currently available.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum Action {
    Fight,
    PlayerMove(u8),
    AiMove,
    Buy(u8),
    RawBuy(u64),
    Reroll,
    Next,
    Restart,
}

/// Structured input for run fuzzing.
#[derive(Arbitrary, Debug)]
struct RunInput {
    seed: u32,
    /// Army slots, mapped into 1..=15.
    slots: u8,
    interest_cap: u8,
    actions: Vec<Action>,
}

fuzz_target!(|input: RunInput| {
    let config = RunConfig {
        seed: Some(input.seed),
        slots: usize::from(input.slots % 15) + 1,
        interest_cap: u32::from(input.interest_cap),
    };
    let mut run = Run::new(config);

    for action in input.actions.into_iter().take(400) {
        match action {
            Action::Fight => {
                run.start_battle();
            }
            Action::PlayerMove(pick) => {
                let moves = run.engine().legal_moves();
                if !moves.is_empty() {
                    let mv = moves[usize::from(pick) % moves.len()];
                    run.on_move(mv.from, mv.to);
                }
            }
            Action::AiMove => {
                run.make_ai_move();
            }
            Action::Buy(pick) => {
                let id = run.state().shop.as_ref().and_then(|shop| {
                    let n = shop.offers.len();
                    (n > 0).then(|| shop.offers[usize::from(pick) % n].id)
                });
                if let Some(id) = id {
                    run.buy_offer(id);
                }
            }
            Action::RawBuy(id) => {
                run.buy_offer(UnitId(id));
            }
            Action::Reroll => {
                run.reroll_shop();
            }
            Action::Next => {
                run.next_round_from_victory();
            }
            Action::Restart => run.start_run(),
        }

        let violations = check_invariants(run.state());
        assert!(
            violations.is_empty(),
            "Invariants violated after {action:?}: {violations:?}"
        );
    }
});

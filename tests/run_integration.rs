//! Multi-phase integration tests for the run state machine.
//!
//! These drive a full round from deploy through battle and shop into the
//! next round, using the public API only.
//!
//! Run with: cargo test --release run_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use gambit::game::{BattleOutcome, Phase, Run, RunConfig, UnitId, check_invariants};
use gambit::{RulesEngine, Square};

/// White walks the e-pawn to promotion while the kings dance; ends in mate.
const MATING_LINE: [(&str, &str); 19] = [
    ("e2", "e4"),
    ("e8", "f7"),
    ("e1", "f2"),
    ("f7", "g7"),
    ("f2", "g3"),
    ("g7", "h8"),
    ("g3", "g4"),
    ("h8", "g8"),
    ("e4", "e5"),
    ("g8", "h8"),
    ("e5", "e6"),
    ("h8", "g8"),
    ("g4", "g5"),
    ("g8", "h8"),
    ("e6", "e7"),
    ("h8", "g8"),
    ("g5", "g6"),
    ("g8", "h8"),
    ("e7", "e8"),
];

fn sq(text: &str) -> Square {
    Square::parse(text).unwrap()
}

fn new_run(seed: u32) -> Run {
    Run::new(RunConfig {
        seed: Some(seed),
        ..RunConfig::default()
    })
}

/// Play round 1 to checkmate and return the run in the shop phase.
fn win_round_one(seed: u32) -> Run {
    let mut run = new_run(seed);
    assert!(run.start_battle());
    assert_eq!(run.state().fen, "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");

    let (last, line) = MATING_LINE.split_last().unwrap();
    for &(from, to) in line {
        let report = run.on_move(sq(from), sq(to)).unwrap();
        assert!(report.outcome.is_none(), "battle ended early at {from}{to}");
        assert!(check_invariants(run.state()).is_empty());
    }

    let report = run.on_move(sq(last.0), sq(last.1)).unwrap();
    assert!(matches!(report.outcome, Some(BattleOutcome::Victory(_))));
    run
}

#[test]
fn test_full_round_to_shop() {
    let run = win_round_one(42);
    let state = run.state();

    assert_eq!(state.phase, Phase::Shop);
    // round bonus 2 + streak 1, nothing captured, no interest below 10
    assert_eq!(state.gold, 3);
    assert!(run.engine().is_checkmate());
    assert!(state.fen.starts_with("4Q2k/"));

    let report = state.last_report.as_ref().unwrap();
    assert!(report.kills.is_empty());
    assert_eq!(report.bounty, 0);
    assert_eq!(report.round_bonus, 2);
    assert_eq!(report.streak_bonus, 1);
    assert_eq!(report.interest, 0);

    let shop = state.shop.as_ref().unwrap();
    assert_eq!(shop.offers.len(), 3);
    assert_eq!(shop.reroll_cost, 2);
    let mut kinds: Vec<_> = shop.offers.iter().map(|o| o.kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), 3);
    assert!(check_invariants(state).is_empty());
}

#[test]
fn test_same_seed_same_run() {
    let a = win_round_one(7);
    let b = win_round_one(7);
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_phase_guards_outside_battle() {
    let mut run = win_round_one(42);
    let before = run.state().clone();

    assert!(!run.start_battle());
    assert!(run.on_move(sq("e8"), sq("e1")).is_none());
    assert!(run.make_ai_move().is_none());
    assert!(run.end_battle_if_over().is_none());
    assert_eq!(run.state(), &before);
}

#[test]
fn test_shop_then_next_round() {
    let mut run = win_round_one(42);
    let shop = run.state().shop.clone().unwrap();

    // unknown id
    assert!(!run.buy_offer(UnitId(9_999)));

    let affordable = shop.offers.iter().find(|o| o.price <= run.state().gold);
    if let Some(offer) = affordable {
        let gold = run.state().gold;
        assert!(run.buy_offer(offer.id));
        assert_eq!(run.state().gold, gold - offer.price);
        assert_eq!(run.state().army.len(), 1);
        assert_eq!(run.state().army[0].kind, offer.kind);
        assert_ne!(run.state().army[0].id, offer.id);
        // the offer is gone
        assert!(!run.buy_offer(offer.id));
    }

    let army = run.state().army_kinds();
    assert!(run.next_round_from_victory());
    assert_eq!(run.phase(), Phase::Deploy);
    assert_eq!(run.state().round, 2);
    assert!(!run.next_round_from_victory());

    assert!(run.start_battle());
    assert_eq!(run.phase(), Phase::Battle);
    assert!(run.state().budget_used <= 8);
    assert!(!run.engine().is_check());
    // forced pawn is round 1 only: king plus the army
    assert_eq!(
        run.engine().piece_count(gambit::rules::Color::White),
        1 + army.len()
    );
    assert!(check_invariants(run.state()).is_empty());
}

#[test]
fn test_reroll_ratchet_in_shop() {
    let mut run = win_round_one(42);
    // 3 gold: one reroll at 2, then 1 gold left for a 3 gold reroll
    assert!(run.reroll_shop());
    assert_eq!(run.state().gold, 1);
    let first = run.state().shop.clone().unwrap();
    assert_eq!(first.reroll_cost, 3);
    assert!(!run.reroll_shop());
    assert_eq!(run.state().shop.as_ref(), Some(&first));
}

#[test]
fn test_ai_battle_stays_consistent() {
    let mut run = new_run(1234);
    assert!(run.start_battle());

    for _ in 0..60 {
        if run.phase() != Phase::Battle {
            break;
        }
        let Some(mv) = run.engine().legal_moves().first().copied() else {
            break;
        };
        let report = run.on_move(mv.from, mv.to).unwrap();
        assert!(check_invariants(run.state()).is_empty());
        if report.outcome.is_some() {
            break;
        }
        if let Some(reply) = run.make_ai_move()
            && reply.outcome.is_some()
        {
            break;
        }
        assert!(check_invariants(run.state()).is_empty());
    }
}

#[test]
fn test_restart_after_victory() {
    let mut run = win_round_one(42);
    run.start_run();
    assert_eq!(run.phase(), Phase::Deploy);
    assert_eq!(run.state().round, 1);
    assert_eq!(run.state().gold, 0);
    assert!(run.state().army.is_empty());
    assert!(run.state().shop.is_none());
    assert_eq!(run.state().seed, 42);
}

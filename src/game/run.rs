//! Run state machine.
//!
//! A [`Run`] owns the authoritative [`RunState`] and the rules engine holding
//! the live battle position. Every mutation goes through an action method.
//! Actions issued in the wrong phase, or whose guards fail, leave the state
//! untouched and return `false` / `None`.
//!
//! ```text
//! deploy --start_battle--> battle --checkmate black--> shop
//!    ^                        |                          |
//!    |                        +--king lost / mated--> gameover
//!    +-------------next_round_from_victory---------------+
//! ```
//!
//! `start_run` returns to deploy from any phase.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, error, trace};

use crate::error::FenError;
use crate::game::{
    ArmySlot, IdSequence, RunConfig, STREAK_BONUS, Shop, UnitId, UnitKind, apply_interest,
    bounty_of, gen_shop, gen_stage_with, list_kills, reroll_shop_rng, round_bonus,
    victory_shop_rng,
};
use crate::render::BoardView;
use crate::rules::{
    ChessMove, Color, Grid, MoveRequest, PieceType, Position, RulesEngine, STARTING_FEN, Square,
    find_king,
};

/// Stage of a run, gating which actions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Between rounds, before the battle starts.
    Deploy,
    /// A battle is being played.
    Battle,
    /// The round was won; buying and rerolling.
    Shop,
    /// The player lost.
    GameOver,
}

/// Payout breakdown of a won battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    /// Round that was won.
    pub round: u32,
    /// Black pieces captured by the final move, weakest first.
    pub kills: Vec<PieceType>,
    /// Sum of kill bounties.
    pub bounty: u32,
    /// Round bonus.
    pub round_bonus: u32,
    /// Streak bonus.
    pub streak_bonus: u32,
    /// Interest added.
    pub interest: u32,
    /// Gold after the payout.
    pub gold: u32,
}

/// How a battle ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BattleOutcome {
    /// Black was checkmated; the run moved to the shop.
    Victory(BattleReport),
    /// The white king is gone or checkmated; the run is over.
    Defeat,
    /// The side to move has no legal moves and is not in check. The phase
    /// does not change.
    Stalemate,
}

/// A move played by either side, with the battle result it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The move as applied.
    pub played: ChessMove,
    /// Set when the move ended the battle.
    pub outcome: Option<BattleOutcome>,
}

/// Authoritative state of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunState {
    /// Run seed, fixed for the life of the run.
    pub seed: u32,
    /// Current round, starting at 1.
    pub round: u32,
    /// Gold on hand.
    pub gold: u32,
    /// Cap on interest per victory.
    pub interest_cap: u32,
    /// Maximum army size.
    pub slots: usize,
    /// Purchased units in purchase order.
    pub army: Vec<ArmySlot>,
    /// Whether the white king was on the board at the last battle check.
    pub king_alive: bool,
    /// Current phase.
    pub phase: Phase,
    /// Current position.
    pub fen: String,
    /// Position before the last applied move.
    pub prev_fen: Option<String>,
    /// Shop, present once a battle has been won.
    pub shop: Option<Shop>,
    /// Enemy budget spent by the current stage.
    pub budget_used: u32,
    /// Payout of the most recent victory.
    pub last_report: Option<BattleReport>,
}

impl RunState {
    /// Fresh state for round 1.
    #[must_use]
    pub fn initial(seed: u32, config: &RunConfig) -> Self {
        Self {
            seed,
            round: 1,
            gold: 0,
            interest_cap: config.interest_cap,
            slots: config.slots,
            army: Vec::new(),
            king_alive: true,
            phase: Phase::Deploy,
            fen: STARTING_FEN.to_string(),
            prev_fen: None,
            shop: None,
            budget_used: 0,
            last_report: None,
        }
    }

    /// Kinds of the army in purchase order.
    #[must_use]
    pub fn army_kinds(&self) -> Vec<UnitKind> {
        self.army.iter().map(|slot| slot.kind).collect()
    }
}

/// A roguelike chess run.
#[derive(Debug)]
pub struct Run<R = Position> {
    state: RunState,
    engine: R,
    ids: IdSequence,
    ai_rng: ChaCha8Rng,
}

impl Run<Position> {
    /// Create a run with the standard rules engine.
    ///
    /// Without a configured seed, a random one is drawn.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self::with_engine(config, Position::starting())
    }
}

impl<R: RulesEngine> Run<R> {
    /// Create a run on a caller-supplied rules engine.
    #[must_use]
    pub fn with_engine(config: RunConfig, engine: R) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut run = Self {
            state: RunState::initial(seed, &config),
            engine,
            ids: IdSequence::new(),
            ai_rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        };
        run.start_run();
        run
    }

    /// Rebuild a run from a saved state.
    ///
    /// New ids continue after the largest id in the army and shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the state's position does not parse.
    pub fn from_state(state: RunState, mut engine: R) -> Result<Self, FenError> {
        engine.load(&state.fen)?;
        let max_id = state
            .army
            .iter()
            .map(|slot| slot.id)
            .chain(state.shop.iter().flat_map(|s| s.offers.iter().map(|o| o.id)))
            .max()
            .map_or(0, |id| id.0);
        let ai_rng = ChaCha8Rng::seed_from_u64(u64::from(state.seed));
        Ok(Self {
            state,
            engine,
            ids: IdSequence::starting_at(max_id.saturating_add(1)),
            ai_rng,
        })
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    /// Rules engine holding the live position.
    #[must_use]
    pub const fn engine(&self) -> &R {
        &self.engine
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Reset to round 1 with no gold and no army, keeping the seed and
    /// configuration. Valid in any phase.
    pub fn start_run(&mut self) {
        let config = RunConfig {
            seed: Some(self.state.seed),
            interest_cap: self.state.interest_cap,
            slots: self.state.slots,
        };
        self.state = RunState::initial(self.state.seed, &config);
        self.ids = IdSequence::new();
        self.ai_rng = ChaCha8Rng::seed_from_u64(u64::from(self.state.seed));
        if let Err(err) = self.engine.load(STARTING_FEN) {
            error!(%err, "rules engine rejected the starting position");
        }
        debug!(seed = self.state.seed, "run started");
    }

    /// Buy an offer from the shop.
    ///
    /// Requires a shop containing the offer, enough gold, and a free army
    /// slot. Returns whether the purchase happened.
    pub fn buy_offer(&mut self, offer_id: UnitId) -> bool {
        let Some(shop) = self.state.shop.as_mut() else {
            trace!("buy ignored: no shop");
            return false;
        };
        let Some(index) = shop.offers.iter().position(|o| o.id == offer_id) else {
            trace!(%offer_id, "buy ignored: offer not in shop");
            return false;
        };
        let offer = shop.offers[index];
        if self.state.gold < offer.price || self.state.army.len() >= self.state.slots {
            trace!(%offer_id, gold = self.state.gold, "buy ignored: gold or slots");
            return false;
        }

        shop.offers.remove(index);
        self.state.gold -= offer.price;
        self.state.army.push(ArmySlot {
            id: self.ids.mint(),
            kind: offer.kind,
        });
        debug!(kind = %offer.kind, price = offer.price, gold = self.state.gold, "offer bought");
        true
    }

    /// Pay the reroll cost for a new set of offers.
    ///
    /// Every reroll within a round draws from the same stream, so the offers
    /// repeat; only the cost climbs. Returns whether the reroll happened.
    pub fn reroll_shop(&mut self) -> bool {
        let Some(shop) = self.state.shop.as_ref() else {
            trace!("reroll ignored: no shop");
            return false;
        };
        let cost = shop.reroll_cost;
        if self.state.gold < cost {
            trace!(gold = self.state.gold, cost, "reroll ignored: not enough gold");
            return false;
        }

        let mut rng = reroll_shop_rng(self.state.seed, self.state.round);
        let mut fresh = gen_shop(&mut rng, &mut self.ids);
        fresh.reroll_cost = cost + 1;
        self.state.gold -= cost;
        self.state.shop = Some(fresh);
        debug!(cost, gold = self.state.gold, "shop rerolled");
        true
    }

    /// Generate this round's stage and begin the battle. Deploy phase only.
    pub fn start_battle(&mut self) -> bool {
        if self.state.phase != Phase::Deploy {
            trace!(phase = ?self.state.phase, "start_battle ignored");
            return false;
        }

        let kinds = self.state.army_kinds();
        let stage = gen_stage_with(&mut self.engine, self.state.seed, self.state.round, &kinds);
        self.state.prev_fen = Some(stage.fen.clone());
        self.state.fen = stage.fen;
        self.state.budget_used = stage.budget_used;
        self.state.king_alive = true;
        self.state.last_report = None;
        self.state.phase = Phase::Battle;
        debug!(round = self.state.round, fen = %self.state.fen, "battle started");
        true
    }

    /// Play a move for the side to move, promoting to a queen.
    ///
    /// Battle phase only. Illegal moves are ignored. After the move the
    /// battle-end check runs immediately.
    pub fn on_move(&mut self, from: Square, to: Square) -> Option<MoveReport> {
        if self.state.phase != Phase::Battle {
            trace!(phase = ?self.state.phase, "move ignored");
            return None;
        }
        let Some(played) = self.engine.make_move(MoveRequest::auto_queen(from, to)) else {
            trace!(%from, %to, "illegal move ignored");
            return None;
        };
        Some(self.after_move(played))
    }

    /// Play a uniformly random legal move for black.
    ///
    /// Battle phase only, and only when black is to move.
    pub fn make_ai_move(&mut self) -> Option<MoveReport> {
        if self.state.phase != Phase::Battle || self.engine.turn() != Color::Black {
            return None;
        }
        let moves = self.engine.legal_moves();
        let choice = *moves.choose(&mut self.ai_rng)?;
        let request = MoveRequest {
            from: choice.from,
            to: choice.to,
            promotion: choice.promotion,
        };
        let Some(played) = self.engine.make_move(request) else {
            error!(mv = %choice, "rules engine refused its own legal move");
            return None;
        };
        Some(self.after_move(played))
    }

    fn after_move(&mut self, played: ChessMove) -> MoveReport {
        let fen = self.engine.fen();
        self.state.prev_fen = Some(std::mem::replace(&mut self.state.fen, fen));
        trace!(mv = %played, fen = %self.state.fen, "move applied");
        let outcome = self.end_battle_if_over();
        MoveReport { played, outcome }
    }

    /// Resolve the battle if the position is terminal. Battle phase only.
    ///
    /// Checkmating black pays out and opens the shop. Losing the white king,
    /// or white being checkmated, ends the run. Stalemate is reported without
    /// a phase change.
    pub fn end_battle_if_over(&mut self) -> Option<BattleOutcome> {
        if self.state.phase != Phase::Battle {
            return None;
        }

        let board = self.engine.board();
        self.state.king_alive = find_king(&board, Color::White).is_some();
        let mated = self.engine.is_checkmate();

        if !self.state.king_alive || (mated && self.engine.turn() == Color::White) {
            self.state.phase = Phase::GameOver;
            debug!(round = self.state.round, "defeat");
            return Some(BattleOutcome::Defeat);
        }

        if mated {
            let report = self.pay_victory(&board);
            return Some(BattleOutcome::Victory(report));
        }

        if self.engine.is_stalemate() {
            debug!(round = self.state.round, "stalemate");
            return Some(BattleOutcome::Stalemate);
        }

        None
    }

    fn pay_victory(&mut self, board: &Grid) -> BattleReport {
        let kills = match self.state.prev_fen.as_deref().map(Position::from_fen) {
            Some(Ok(prev)) => list_kills(&prev.board(), board),
            Some(Err(err)) => {
                error!(%err, "previous position does not parse, no kills counted");
                Vec::new()
            }
            None => Vec::new(),
        };
        let bounty: u32 = kills.iter().map(|&k| bounty_of(k)).sum();
        let bonus = round_bonus(self.state.round);
        let raw = self
            .state
            .gold
            .saturating_add(bounty)
            .saturating_add(bonus)
            .saturating_add(STREAK_BONUS);
        let paid = apply_interest(raw, self.state.interest_cap);

        let mut rng = victory_shop_rng(self.state.seed, self.state.round);
        self.state.shop = Some(gen_shop(&mut rng, &mut self.ids));
        self.state.gold = paid.total;
        self.state.phase = Phase::Shop;

        let report = BattleReport {
            round: self.state.round,
            kills,
            bounty,
            round_bonus: bonus,
            streak_bonus: STREAK_BONUS,
            interest: paid.interest,
            gold: paid.total,
        };
        debug!(round = report.round, gold = report.gold, bounty, "victory");
        self.state.last_report = Some(report.clone());
        report
    }

    /// Advance to the next round. Shop phase only; the army carries over.
    pub fn next_round_from_victory(&mut self) -> bool {
        if self.state.phase != Phase::Shop {
            trace!(phase = ?self.state.phase, "next round ignored");
            return false;
        }
        self.state.round += 1;
        self.state.phase = Phase::Deploy;
        debug!(round = self.state.round, "next round");
        true
    }

    /// Legal destinations for the piece on `from`, if it belongs to the side
    /// to move.
    #[must_use]
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        let mut targets: Vec<Square> = self
            .engine
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    /// What a board presenter needs: position, selection and its targets.
    #[must_use]
    pub fn board_view(&self, selected: Option<Square>) -> BoardView {
        BoardView {
            fen: self.engine.fen(),
            grid: self.engine.board(),
            selected,
            legal_targets: selected.map(|sq| self.legal_targets(sq)).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u32) -> RunConfig {
        RunConfig {
            seed: Some(seed),
            ..RunConfig::default()
        }
    }

    fn sq(text: &str) -> Square {
        Square::parse(text).unwrap()
    }

    fn shop_state(gold: u32) -> Run {
        let mut state = RunState::initial(42, &config(42));
        state.gold = gold;
        state.phase = Phase::Shop;
        let mut ids = IdSequence::new();
        state.shop = Some(gen_shop(&mut victory_shop_rng(42, 1), &mut ids));
        Run::from_state(state, Position::starting()).unwrap()
    }

    #[test]
    fn test_new_run_initial_state() {
        let run = Run::new(config(42));
        let s = run.state();
        assert_eq!(s.seed, 42);
        assert_eq!(s.round, 1);
        assert_eq!(s.gold, 0);
        assert_eq!(s.phase, Phase::Deploy);
        assert!(s.army.is_empty());
        assert!(s.shop.is_none());
        assert_eq!(s.fen, STARTING_FEN);
    }

    #[test]
    fn test_start_battle_round_one() {
        let mut run = Run::new(config(42));
        assert!(run.start_battle());
        assert_eq!(run.phase(), Phase::Battle);
        assert_eq!(run.state().fen, "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(run.state().prev_fen.as_deref(), Some(run.state().fen.as_str()));
        // Second call is a no-op.
        let before = run.state().clone();
        assert!(!run.start_battle());
        assert_eq!(run.state(), &before);
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut run = Run::new(config(1));
        run.start_battle();
        let before = run.state().clone();
        assert!(run.on_move(sq("e2"), sq("e5")).is_none());
        assert_eq!(run.state(), &before);
    }

    #[test]
    fn test_move_outside_battle_is_noop() {
        let mut run = Run::new(config(1));
        let before = run.state().clone();
        assert!(run.on_move(sq("e2"), sq("e4")).is_none());
        assert_eq!(run.state(), &before);
    }

    #[test]
    fn test_on_move_tracks_prev_fen() {
        let mut run = Run::new(config(1));
        run.start_battle();
        let start = run.state().fen.clone();
        let report = run.on_move(sq("e2"), sq("e4")).unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(run.state().prev_fen.as_deref(), Some(start.as_str()));
        assert_eq!(run.state().fen, "4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1");
    }

    #[test]
    fn test_ai_move_only_on_black_turn() {
        let mut run = Run::new(config(1));
        run.start_battle();
        assert!(run.make_ai_move().is_none());
        run.on_move(sq("e2"), sq("e4")).unwrap();
        let report = run.make_ai_move().unwrap();
        assert_eq!(report.played.from, sq("e8"));
        assert_eq!(run.engine().turn(), Color::White);
    }

    #[test]
    fn test_ai_is_seeded() {
        let play = || {
            let mut run = Run::new(config(5));
            run.start_battle();
            run.on_move(sq("e2"), sq("e4"));
            run.make_ai_move().map(|r| r.played)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_capture_mate_pays_bounty() {
        let mut state = RunState::initial(42, &config(42));
        state.phase = Phase::Battle;
        state.fen = "7k/6r1/5K2/8/8/8/8/6Q1 w - - 0 1".to_string();
        let mut run = Run::from_state(state, Position::starting()).unwrap();

        let report = run.on_move(sq("g1"), sq("g7")).unwrap();
        let Some(BattleOutcome::Victory(payout)) = report.outcome else {
            panic!("expected victory, got {:?}", report.outcome);
        };
        assert_eq!(payout.kills, vec![PieceType::Rook]);
        assert_eq!(payout.bounty, 5);
        assert_eq!(payout.gold, 8);
        assert_eq!(run.state().gold, 8);
        assert_eq!(run.phase(), Phase::Shop);
        assert_eq!(run.state().shop.as_ref().map(|s| s.offers.len()), Some(3));
    }

    #[test]
    fn test_interest_applies_to_payout() {
        let mut state = RunState::initial(42, &config(42));
        state.phase = Phase::Battle;
        state.gold = 20;
        state.fen = "7k/6r1/5K2/8/8/8/8/6Q1 w - - 0 1".to_string();
        let mut run = Run::from_state(state, Position::starting()).unwrap();

        run.on_move(sq("g1"), sq("g7")).unwrap();
        let payout = run.state().last_report.clone().unwrap();
        // 20 + 5 + 2 + 1 = 28, interest 2.
        assert_eq!(payout.interest, 2);
        assert_eq!(run.state().gold, 30);
    }

    #[test]
    fn test_missing_white_king_is_defeat() {
        let mut state = RunState::initial(1, &config(1));
        state.phase = Phase::Battle;
        state.fen = "4k3/8/8/8/8/8/8/8 w - - 0 1".to_string();
        let mut run = Run::from_state(state, Position::starting()).unwrap();

        assert_eq!(run.end_battle_if_over(), Some(BattleOutcome::Defeat));
        assert_eq!(run.phase(), Phase::GameOver);
        assert!(!run.state().king_alive);

        let before = run.state().clone();
        assert!(!run.start_battle());
        assert_eq!(run.state(), &before);
        assert_eq!(run.engine().fen(), before.fen);
    }

    #[test]
    fn test_white_mated_is_defeat() {
        let mut state = RunState::initial(1, &config(1));
        state.phase = Phase::Battle;
        state.fen = "4k3/8/8/8/8/8/5PPP/r5K1 w - - 0 1".to_string();
        let mut run = Run::from_state(state, Position::starting()).unwrap();

        assert_eq!(run.end_battle_if_over(), Some(BattleOutcome::Defeat));
        assert_eq!(run.phase(), Phase::GameOver);
    }

    #[test]
    fn test_stalemate_keeps_phase() {
        let mut state = RunState::initial(1, &config(1));
        state.phase = Phase::Battle;
        state.fen = "k7/8/1Q6/8/8/8/8/2K5 b - - 0 1".to_string();
        let mut run = Run::from_state(state, Position::starting()).unwrap();

        assert_eq!(run.end_battle_if_over(), Some(BattleOutcome::Stalemate));
        assert_eq!(run.phase(), Phase::Battle);
    }

    #[test]
    fn test_buy_offer_guards() {
        let mut run = shop_state(100);
        let offers = run.state().shop.clone().unwrap().offers;

        assert!(run.buy_offer(offers[0].id));
        assert_eq!(run.state().gold, 100 - offers[0].price);
        assert_eq!(run.state().army.len(), 1);
        assert_eq!(run.state().army[0].kind, offers[0].kind);
        assert_eq!(run.state().shop.as_ref().unwrap().offers.len(), 2);

        // Already bought.
        assert!(!run.buy_offer(offers[0].id));
        // Unknown id.
        assert!(!run.buy_offer(UnitId(9_999)));
    }

    #[test]
    fn test_buy_offer_needs_gold() {
        let mut run = shop_state(0);
        let before = run.state().clone();
        let id = before.shop.as_ref().unwrap().offers[0].id;
        assert!(!run.buy_offer(id));
        assert_eq!(run.state(), &before);
    }

    #[test]
    fn test_buy_offer_respects_slots() {
        let mut run = shop_state(1_000);
        for _ in 0..10 {
            run.reroll_shop();
            let ids: Vec<_> = run.state().shop.as_ref().unwrap().offers.iter().map(|o| o.id).collect();
            for id in ids {
                run.buy_offer(id);
            }
        }
        assert_eq!(run.state().army.len(), run.state().slots);
    }

    #[test]
    fn test_bought_ids_are_fresh() {
        let mut run = shop_state(100);
        let offer_ids: Vec<_> = run.state().shop.as_ref().unwrap().offers.iter().map(|o| o.id).collect();
        run.buy_offer(offer_ids[0]);
        let slot_id = run.state().army[0].id;
        assert!(!offer_ids.contains(&slot_id));
    }

    #[test]
    fn test_reroll_cost_ratchet() {
        let mut run = shop_state(50);
        assert!(run.reroll_shop());
        assert_eq!(run.state().shop.as_ref().unwrap().reroll_cost, 3);
        assert!(run.reroll_shop());
        assert_eq!(run.state().shop.as_ref().unwrap().reroll_cost, 4);
        assert_eq!(run.state().gold, 50 - 2 - 3);
    }

    #[test]
    fn test_reroll_without_shop_or_gold() {
        let mut run = Run::new(config(3));
        assert!(!run.reroll_shop());

        let mut run = shop_state(1);
        let before = run.state().clone();
        assert!(!run.reroll_shop());
        assert_eq!(run.state(), &before);
    }

    #[test]
    fn test_next_round_only_from_shop() {
        let mut run = Run::new(config(3));
        assert!(!run.next_round_from_victory());

        let mut run = shop_state(0);
        assert!(run.next_round_from_victory());
        assert_eq!(run.state().round, 2);
        assert_eq!(run.phase(), Phase::Deploy);
    }

    #[test]
    fn test_start_run_keeps_seed() {
        let mut run = shop_state(40);
        let id = run.state().shop.as_ref().unwrap().offers[0].id;
        run.buy_offer(id);
        run.start_run();

        let s = run.state();
        assert_eq!(s.seed, 42);
        assert_eq!(s.gold, 0);
        assert_eq!(s.round, 1);
        assert!(s.army.is_empty());
        assert!(s.shop.is_none());
        assert_eq!(s.phase, Phase::Deploy);
    }

    #[test]
    fn test_board_view_lists_targets() {
        let mut run = Run::new(config(42));
        run.start_battle();
        let view = run.board_view(Some(sq("e2")));
        assert_eq!(view.selected, Some(sq("e2")));
        assert_eq!(view.fen, run.state().fen);
        assert_eq!(view.legal_targets, vec![sq("e3"), sq("e4")]);
        assert!(run.board_view(None).legal_targets.is_empty());
    }
}

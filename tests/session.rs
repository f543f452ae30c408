//! Session loop tests driven by a scripted interface.

use std::collections::VecDeque;

use shoe21::{
    ActionError, BetError, BetReply, Card, DealerStep, Deck, Game, GameOptions, GameState,
    Interface, Move, Notice, Outcome, Rank, Session, Suit, TableView,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn table(chips: usize, draws: &[Card]) -> Game {
    let options = GameOptions::default()
        .with_starting_chips(chips)
        .with_reshuffle_threshold(0);
    Game::new(options, 7)
        .unwrap()
        .with_deck(Deck::from_cards(draws.to_vec()))
}

/// Answers prompts from fixed queues and records what it was shown.
#[derive(Debug, Default)]
struct Script {
    bets: VecDeque<BetReply>,
    moves: VecDeque<Move>,
    offered: Vec<Vec<Move>>,
    renders: Vec<TableView>,
    notices: Vec<Notice>,
    pauses: usize,
}

impl Script {
    fn new(bets: &[BetReply], moves: &[Move]) -> Self {
        Self {
            bets: bets.iter().copied().collect(),
            moves: moves.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Interface for Script {
    fn render(&mut self, view: &TableView) {
        self.renders.push(view.clone());
    }

    fn request_bet(&mut self, _chips: usize, _bet_limit: usize) -> BetReply {
        self.bets.pop_front().unwrap_or(BetReply::Exit)
    }

    fn request_move(&mut self, eligible: &[Move]) -> Move {
        self.offered.push(eligible.to_vec());
        self.moves.pop_front().unwrap_or(Move::Exit)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

#[test]
fn leaving_at_the_first_bet_keeps_the_stack() {
    let mut ui = Script::new(&[BetReply::Exit], &[]);
    let summary = Session::new(table(500, &[])).run(&mut ui).unwrap();

    assert!(summary.rounds.is_empty());
    assert_eq!(summary.final_chips, 500);
    assert!(!summary.broke);
    assert_eq!(ui.renders.len(), 1);
}

#[test]
fn rejected_bet_is_reported_and_asked_again() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Eight),
    ];
    let mut ui = Script::new(
        &[BetReply::Amount(150), BetReply::Amount(10), BetReply::Exit],
        &[Move::Stay],
    );
    let summary = Session::new(table(500, &draws)).run(&mut ui).unwrap();

    assert_eq!(
        ui.notices[0],
        Notice::BetRejected(BetError::OverLimit {
            amount: 150,
            limit: 100
        })
    );
    assert_eq!(summary.rounds.len(), 1);
    assert_eq!(summary.rounds[0].outcome, Outcome::Win);
    assert_eq!(summary.rounds[0].payout, 20);
    assert_eq!(summary.final_chips, 510);
}

#[test]
fn dealer_steps_are_reported_and_paced() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Hearts, Rank::Five),
    ];
    let mut ui = Script::new(&[BetReply::Amount(10)], &[Move::Stay]);
    let summary = Session::new(table(500, &draws)).run(&mut ui).unwrap();

    let dealer: Vec<Notice> = ui
        .notices
        .iter()
        .copied()
        .filter(|n| matches!(n, Notice::Dealer(_)))
        .collect();
    assert_eq!(
        dealer,
        vec![
            Notice::Dealer(DealerStep::Revealed),
            Notice::Dealer(DealerStep::Drew(card(Suit::Hearts, Rank::Five))),
            Notice::Dealer(DealerStep::Stood),
        ]
    );
    assert_eq!(ui.pauses, 2);

    // dealer 21 against player 19
    assert_eq!(summary.rounds[0].outcome, Outcome::Lose);
    assert_eq!(summary.final_chips, 490);
}

#[test]
fn final_table_is_shown_before_cards_are_cleared() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Eight),
    ];
    let mut ui = Script::new(&[BetReply::Amount(10)], &[Move::Stay]);
    Session::new(table(500, &draws)).run(&mut ui).unwrap();

    let settled = ui
        .renders
        .iter()
        .find(|view| view.state == GameState::RoundResolved)
        .unwrap();
    assert_eq!(settled.player.cards.len(), 2);
    assert_eq!(settled.dealer.cards.len(), 2);
    assert!(settled.dealer.cards.iter().all(|c| c.face_up));
    assert_eq!(settled.player.score, "18");
    assert_eq!(settled.dealer.score, "17");
}

#[test]
fn ineligible_move_is_reported_and_asked_again() {
    let draws = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Three),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Four),
    ];
    let mut ui = Script::new(
        &[BetReply::Amount(10)],
        &[Move::Hit, Move::Surrender, Move::Stay],
    );
    let summary = Session::new(table(500, &draws)).run(&mut ui).unwrap();

    assert!(ui.offered[0].contains(&Move::Surrender));
    assert!(!ui.offered[1].contains(&Move::Surrender));
    assert!(
        ui.notices
            .contains(&Notice::MoveRejected(ActionError::InvalidMove(Move::Surrender)))
    );
    // player 9 against dealer 17
    assert_eq!(summary.rounds[0].outcome, Outcome::Lose);
}

#[test]
fn surrender_returns_half_the_stake() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Nine),
    ];
    let mut ui = Script::new(&[BetReply::Amount(26)], &[Move::Surrender]);
    let summary = Session::new(table(500, &draws)).run(&mut ui).unwrap();

    assert_eq!(summary.rounds[0].outcome, Outcome::Surrender);
    assert_eq!(summary.rounds[0].payout, 13);
    assert_eq!(summary.final_chips, 487);
    assert!(!ui.notices.iter().any(|n| matches!(n, Notice::Dealer(_))));
}

#[test]
fn losing_the_last_chip_ends_the_session() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Nine),
    ];
    let mut ui = Script::new(&[BetReply::Amount(10), BetReply::Amount(10)], &[Move::Stay]);
    let summary = Session::new(table(10, &draws)).run(&mut ui).unwrap();

    assert!(summary.broke);
    assert_eq!(summary.final_chips, 0);
    assert_eq!(summary.rounds.len(), 1);
    // the second bet is never requested
    assert_eq!(ui.bets.len(), 1);
}

#[test]
fn exiting_mid_round_forfeits_the_stake() {
    let draws = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Nine),
    ];
    let mut ui = Script::new(&[BetReply::Amount(40)], &[Move::Exit]);
    let summary = Session::new(table(500, &draws)).run(&mut ui).unwrap();

    assert!(summary.rounds.is_empty());
    assert_eq!(summary.final_chips, 460);
    assert!(!summary.broke);
}

#[test]
fn step_reports_when_the_session_is_over() {
    let mut ui = Script::new(&[BetReply::Exit], &[]);
    let mut session = Session::new(table(500, &[]));

    assert!(session.step(&mut ui).unwrap());
    assert_eq!(session.game().state(), GameState::SessionEnded);
    assert!(!session.step(&mut ui).unwrap());
    assert!(session.rounds().is_empty());
}

#[test]
fn exhausted_shoe_aborts_the_session() {
    let draws = [card(Suit::Hearts, Rank::Ten), card(Suit::Clubs, Rank::Ten)];
    let mut ui = Script::new(&[BetReply::Amount(10)], &[]);
    assert!(Session::new(table(500, &draws)).run(&mut ui).is_err());
}

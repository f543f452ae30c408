//! Input parsing and terminal front end tests.

use std::io::Cursor;

use shoe21::input::{parse_bet, parse_move};
use shoe21::{
    BetReply, Card, Deck, Game, GameOptions, InputError, Interface, Move, Rank, Session, Suit,
    TerminalInterface,
};

fn terminal(input: &str) -> TerminalInterface<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalInterface::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(term: TerminalInterface<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(term.into_output()).unwrap()
}

#[test]
fn bet_within_range_is_accepted() {
    assert_eq!(parse_bet("1", 500, 100), Ok(BetReply::Amount(1)));
    assert_eq!(parse_bet(" 100 ", 500, 100), Ok(BetReply::Amount(100)));
    assert_eq!(parse_bet("40", 40, 100), Ok(BetReply::Amount(40)));
}

#[test]
fn bet_outside_range_is_rejected() {
    assert_eq!(
        parse_bet("0", 500, 100),
        Err(InputError::BetOutOfRange { amount: 0, max: 100 })
    );
    assert_eq!(
        parse_bet("-5", 500, 100),
        Err(InputError::BetOutOfRange { amount: -5, max: 100 })
    );
    assert_eq!(
        parse_bet("41", 40, 100),
        Err(InputError::BetOutOfRange { amount: 41, max: 40 })
    );
}

#[test]
fn non_numeric_bet_means_leave() {
    assert_eq!(parse_bet("q", 500, 100), Ok(BetReply::Exit));
    assert_eq!(parse_bet("", 500, 100), Ok(BetReply::Exit));
    assert_eq!(parse_bet("ten", 500, 100), Ok(BetReply::Exit));
}

#[test]
fn moves_by_key_name_and_alias() {
    let all = Move::ALL;
    assert_eq!(parse_move("h", &all), Ok(Move::Hit));
    assert_eq!(parse_move("STAY", &all), Ok(Move::Stay));
    assert_eq!(parse_move("stand", &all), Ok(Move::Stay));
    assert_eq!(parse_move("u", &all), Ok(Move::Surrender));
    assert_eq!(parse_move("double-down", &all), Ok(Move::DoubleDown));
    assert_eq!(parse_move(" quit\n", &all), Ok(Move::Exit));
}

#[test]
fn unknown_and_ineligible_moves_are_rejected() {
    let offered = [Move::Hit, Move::Stay, Move::Exit];
    assert_eq!(
        parse_move("Split", &offered),
        Err(InputError::UnknownMove("split".to_string()))
    );
    assert_eq!(
        parse_move("d", &offered),
        Err(InputError::IneligibleMove(Move::DoubleDown))
    );
}

#[test]
fn move_keys_are_distinct() {
    for (i, a) in Move::ALL.iter().enumerate() {
        for b in &Move::ALL[i + 1..] {
            assert_ne!(a.key(), b.key());
        }
    }
}

#[test]
fn terminal_reprompts_until_bet_is_valid() {
    let mut term = terminal("500\n0\n25\n");
    assert_eq!(term.request_bet(500, 100), BetReply::Amount(25));

    let text = output(term);
    assert_eq!(text.matches("Bet amount (1-100, q to quit): ").count(), 3);
    assert!(text.contains("bet must be between 1 and 100, got 500"));
}

#[test]
fn terminal_end_of_input_leaves_the_table() {
    let mut term = terminal("");
    assert_eq!(term.request_bet(500, 100), BetReply::Exit);
    assert_eq!(term.request_move(&[Move::Hit, Move::Exit]), Move::Exit);
}

#[test]
fn terminal_lists_actions_and_rejects_ineligible() {
    let mut term = terminal("d\nh\n");
    assert_eq!(term.request_move(&[Move::Hit, Move::Stay, Move::Exit]), Move::Hit);

    let text = output(term);
    assert!(text.contains("Actions: [h]hit [s]stay [u]surrender [d]double [q]exit"));
    assert!(text.contains("double is not available right now"));
}

#[test]
fn terminal_plays_a_full_round() {
    let deck = Deck::from_cards(vec![
        Card::new(Suit::Hearts, Rank::Ten),
        Card::new(Suit::Clubs, Rank::Nine),
        Card::new(Suit::Spades, Rank::Eight),
        Card::new(Suit::Diamonds, Rank::Eight),
    ]);
    let options = GameOptions::default().with_reshuffle_threshold(0);
    let game = Game::new(options, 3).unwrap().with_deck(deck);

    let mut term = terminal("10\ns\nq\n");
    let summary = Session::new(game).run(&mut term).unwrap();
    assert_eq!(summary.final_chips, 510);

    let text = output(term);
    assert!(text.contains("Dealer: 9C ?? (9)"));
    assert!(text.contains("Player: 10H 8S (18)"));
    assert!(text.contains("Dealer turns over the hole card."));
    assert!(text.contains("Result: win. Payout 20 (net +10). Chips: 510"));
    assert!(text.contains("Player: (no cards) (0)"));
}

//! A single-player blackjack round engine.
//!
//! The crate provides a [`Game`] value that moves through a round (betting,
//! the initial deal, the player's turn, the dealer's turn, settlement)
//! one transition at a time. Each transition returns a new `Game`, so
//! earlier snapshots can be kept for replay. A [`Session`] drives the game
//! against any [`Interface`]; [`TerminalInterface`] is the stock text front
//! end.
//!
//! # Example
//!
//! ```
//! use shoe21::{Card, Deck, Game, GameOptions, GameState, Outcome, Rank, Suit};
//!
//! let deck = Deck::from_cards(vec![
//!     Card::new(Suit::Hearts, Rank::Ace),   // player
//!     Card::new(Suit::Clubs, Rank::Nine),   // dealer up
//!     Card::new(Suit::Spades, Rank::King),  // player
//!     Card::new(Suit::Hearts, Rank::Eight), // dealer hole
//! ]);
//! let game = Game::new(GameOptions::default(), 42)
//!     .unwrap()
//!     .with_deck(deck)
//!     .place_bet(20)
//!     .unwrap()
//!     .deal()
//!     .unwrap();
//! assert_eq!(game.state(), GameState::DealerTurn);
//!
//! let (game, _steps) = game.dealer_play().unwrap();
//! let (game, result) = game.finish_round().unwrap();
//! assert_eq!(result.outcome, Outcome::Blackjack);
//! assert_eq!(game.chips(), 530);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod result;
pub mod session;
pub mod terminal;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Deck, Shoe};
pub use error::{
    ActionError, BetError, DealError, DealerError, DeckError, InputError, OptionsError,
    RoundError, SessionError,
};
pub use game::{DealerStep, Game, GameState, Move};
pub use hand::{Hand, Holder, Totals};
pub use input::BetReply;
pub use options::{GameOptions, StandRule};
pub use result::{Outcome, RoundResult};
pub use session::{Interface, Notice, Session, SessionSummary};
pub use terminal::TerminalInterface;
pub use view::{CardView, HandView, TableView};

//! Game engine and state management.
//!
//! Every transition borrows the current [`Game`] and returns a new one, so
//! earlier snapshots stay valid for replay or undo and a failed transition
//! leaves the caller's value untouched.

use tracing::debug;

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::error::{DeckError, OptionsError};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod bet;
mod dealer;
mod round;
pub mod state;

pub use state::{DealerStep, GameState, Move};

/// A single-player blackjack table.
///
/// The game owns the shoe, both hands, the chip pool, and the round state.
/// Use [`GameOptions`] to configure decks, limits, and the dealer rule.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    options: GameOptions,
    /// Live deck, discard pile and shuffling generator.
    shoe: Shoe,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; the hole card is dealt face down.
    dealer: Hand,
    /// Chips not currently staked.
    chips: usize,
    /// Chips staked on the current round.
    current_bet: usize,
    /// Player actions taken this round.
    turns_taken: usize,
    /// Whether the player surrendered this round.
    surrendered: bool,
    /// Current round state.
    state: GameState,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options do not describe a playable table.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::AwaitingBet);
    /// assert_eq!(game.cards_remaining(), 6 * 52);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed).map_err(|_| OptionsError::ZeroDecks)?;
        let chips = options.starting_chips;
        let state = if chips == 0 {
            GameState::SessionEnded
        } else {
            GameState::AwaitingBet
        };

        Ok(Self {
            options,
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            chips,
            current_bet: 0,
            turns_taken: 0,
            surrendered: false,
            state,
        })
    }

    /// Returns a copy of the game whose live deck deals `deck` in order.
    ///
    /// Useful for replaying a recorded shoe.
    #[must_use]
    pub fn with_deck(&self, deck: Deck) -> Self {
        let mut next = self.clone();
        next.shoe.set_deck(deck);
        next
    }

    /// Draws `count` cards with the given visibility.
    fn draw(&mut self, count: usize, face_up: bool) -> Result<Vec<Card>, DeckError> {
        let cards = self.shoe.draw(count)?;
        debug!(count, remaining = self.shoe.cards_remaining(), "drew cards");
        Ok(cards
            .into_iter()
            .map(|card| card.with_face_up(face_up))
            .collect())
    }

    /// Draws a single face-up card.
    fn draw_one(&mut self) -> Result<Card, DeckError> {
        self.draw(1, true)?
            .pop()
            .ok_or(DeckError::InsufficientCards {
                requested: 1,
                remaining: 0,
            })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the live deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.cards_remaining()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the chips not currently staked.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the table limit.
    #[must_use]
    pub const fn bet_limit(&self) -> usize {
        self.options.bet_limit
    }

    /// Returns the chips staked on the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the number of player actions taken this round.
    #[must_use]
    pub const fn turns_taken(&self) -> usize {
        self.turns_taken
    }

    /// Returns whether the player surrendered this round.
    #[must_use]
    pub const fn surrendered(&self) -> bool {
        self.surrendered
    }

    /// Returns whether the session is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::SessionEnded
    }
}

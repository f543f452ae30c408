//! Table configuration options.

use crate::error::OptionsError;
use crate::hand::Hand;

/// When the dealer stops drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StandRule {
    /// Stand only once every total is 17 or more, so soft hands below a
    /// hard 17 keep drawing.
    #[default]
    AllTotals,
    /// Stand on any best total of 17 or more, soft or hard.
    Any17,
}

impl StandRule {
    /// Returns whether a dealer holding `hand` stands under this rule.
    #[must_use]
    pub fn stands(self, hand: &Hand) -> bool {
        match self {
            Self::AllTotals => hand.all_totals_at_least_17(),
            Self::Any17 => hand.top_score().is_none_or(|best| best >= 17),
        }
    }
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoe21::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_starting_chips(1_000)
///     .with_bet_limit(250);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of packs in the shoe.
    pub decks: u8,
    /// Chips the player starts the session with.
    pub starting_chips: usize,
    /// Largest bet the table accepts.
    pub bet_limit: usize,
    /// Live-deck size below which the discard pile is shuffled back in at
    /// the end of a round.
    pub reshuffle_threshold: usize,
    /// Dealer stand rule.
    pub stand_rule: StandRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_chips: 500,
            bet_limit: 100,
            reshuffle_threshold: 52,
            stand_rule: StandRule::AllTotals,
        }
    }
}

impl GameOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting chip balance.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the table limit.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_limit(25);
    /// assert_eq!(options.bet_limit, 25);
    /// ```
    #[must_use]
    pub const fn with_bet_limit(mut self, limit: usize) -> Self {
        self.bet_limit = limit;
        self
    }

    /// Sets the reshuffle threshold.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets the dealer stand rule.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::{GameOptions, StandRule};
    ///
    /// let options = GameOptions::default().with_stand_rule(StandRule::Any17);
    /// assert_eq!(options.stand_rule, StandRule::Any17);
    /// ```
    #[must_use]
    pub const fn with_stand_rule(mut self, rule: StandRule) -> Self {
        self.stand_rule = rule;
        self
    }

    /// Checks the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no packs or the bet limit is zero.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.decks == 0 {
            return Err(OptionsError::ZeroDecks);
        }
        if self.bet_limit == 0 {
            return Err(OptionsError::ZeroBetLimit);
        }
        Ok(())
    }
}

//! Error types for game operations.

use thiserror::Error;

use crate::game::Move;

/// Errors that can occur when validating [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The shoe must hold at least one pack.
    #[error("deck count must be at least 1")]
    ZeroDecks,
    /// The table limit must allow some bet.
    #[error("bet limit must be at least 1")]
    ZeroBetLimit,
}

/// Errors that can occur when building or drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A shoe was requested with no packs in it.
    #[error("deck count must be at least 1")]
    InvalidDeckCount,
    /// More cards were requested than the deck holds.
    #[error("requested {requested} cards but only {remaining} remain")]
    InsufficientCards {
        /// Cards requested.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount exceeds the table limit.
    #[error("bet of {amount} exceeds the table limit of {limit}")]
    OverLimit {
        /// Requested bet.
        amount: usize,
        /// Table limit.
        limit: usize,
    },
    /// Bet amount exceeds the player's chips.
    #[error("bet of {amount} exceeds available chips ({chips})")]
    InsufficientChips {
        /// Requested bet.
        amount: usize,
        /// Chips available.
        chips: usize,
    },
    /// Not enough chips to raise the current bet.
    #[error("raising the bet needs {needed} more chips but only {chips} remain")]
    InsufficientFunds {
        /// Additional chips required.
        needed: usize,
        /// Chips available.
        chips: usize,
    },
}

impl BetError {
    /// Returns whether this error rejects the bet amount itself, as opposed to
    /// a raise the bankroll cannot cover.
    #[must_use]
    pub const fn is_invalid_bet(&self) -> bool {
        matches!(
            self,
            Self::ZeroBet | Self::OverLimit { .. } | Self::InsufficientChips { .. }
        )
    }
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The shoe could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The move is not currently eligible.
    #[error("{0} is not available right now")]
    InvalidMove(Move),
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The shoe could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid game state for the dealer's turn.
    #[error("invalid game state for the dealer's turn")]
    InvalidState,
    /// The shoe could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when finishing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for settling the round.
    #[error("invalid game state for settling the round")]
    InvalidState,
}

/// Errors raised while interpreting typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A bet outside `1..=max`.
    #[error("bet must be between 1 and {max}, got {amount}")]
    BetOutOfRange {
        /// What was typed.
        amount: i64,
        /// Largest acceptable bet.
        max: usize,
    },
    /// Input that names no move.
    #[error("unknown action '{0}'")]
    UnknownMove(String),
    /// A move that exists but is not on offer right now.
    #[error("{0} is not available right now")]
    IneligibleMove(Move),
}

/// Engine errors that stop a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed for a reason other than eligibility.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The dealer's turn failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// Settling the round failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}

//! Game state types.

use std::fmt;

/// Where the round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to place a bet.
    AwaitingBet,
    /// Bet placed, initial cards not yet dealt.
    InitialDeal,
    /// Waiting for player moves.
    PlayerTurn,
    /// Dealer reveals and plays out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundResolved,
    /// The player left or ran out of chips.
    SessionEnded,
}

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stay,
    /// Give up half the bet and end the round.
    Surrender,
    /// Double the bet, take exactly one card, then stand.
    DoubleDown,
    /// Leave the table.
    Exit,
}

impl Move {
    /// Every move in menu order.
    pub const ALL: [Self; 5] = [
        Self::Hit,
        Self::Stay,
        Self::Surrender,
        Self::DoubleDown,
        Self::Exit,
    ];

    /// Single-letter shortcut accepted at the prompt.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Hit => 'h',
            Self::Stay => 's',
            Self::Surrender => 'u',
            Self::DoubleDown => 'd',
            Self::Exit => 'q',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stay => "stay",
            Self::Surrender => "surrender",
            Self::DoubleDown => "double",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single discrete step of the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The hole card was turned over.
    Revealed,
    /// The dealer drew a card.
    Drew(crate::card::Card),
    /// The dealer stopped; the round is resolved.
    Stood,
}

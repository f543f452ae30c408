//! Round outcomes and settlement records.

use std::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player gave up the hand before acting.
    Surrender,
    /// Player won with a natural on the first turn.
    Blackjack,
    /// Tie.
    Push,
    /// Player wins (dealer busts or player scores higher).
    Win,
    /// Player loses.
    Lose,
}

impl Outcome {
    /// All outcomes.
    pub const ALL: [Self; 5] = [
        Self::Surrender,
        Self::Blackjack,
        Self::Push,
        Self::Win,
        Self::Lose,
    ];

    /// Returned total (stake plus winnings) per chip staked, in halves.
    const fn halves(self) -> u8 {
        match self {
            Self::Surrender => 1,
            Self::Blackjack => 5,
            Self::Push => 2,
            Self::Win => 4,
            Self::Lose => 0,
        }
    }

    /// Returns the multiplier applied to the bet to get the returned total.
    ///
    /// Informational only; settlement goes through [`payout`](Self::payout),
    /// which works in whole chips and rounds down.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        f64::from(self.halves()) / 2.0
    }

    /// Returns the chips handed back for a `bet`, rounded down.
    ///
    /// # Example
    ///
    /// ```
    /// use shoe21::Outcome;
    ///
    /// assert_eq!(Outcome::Blackjack.payout(20), 50);
    /// assert_eq!(Outcome::Surrender.payout(25), 12);
    /// ```
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        bet.saturating_mul(self.halves() as usize) / 2
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Surrender => "surrender",
            Self::Blackjack => "blackjack",
            Self::Push => "push",
            Self::Win => "win",
            Self::Lose => "lose",
        };
        f.write_str(text)
    }
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome.
    pub outcome: Outcome,
    /// The bet that was settled (after any double-down).
    pub bet: usize,
    /// Chips returned to the player.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's best total, `None` if busted.
    pub player_total: Option<u8>,
    /// The dealer's best total, `None` if busted.
    pub dealer_total: Option<u8>,
    /// Chips held after settlement.
    pub chips: usize,
    /// Whether the shoe was reshuffled while clearing the table.
    pub reshuffled: bool,
}

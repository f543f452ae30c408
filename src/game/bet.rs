use tracing::info;

use crate::error::BetError;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    /// Places a bet for the coming round.
    ///
    /// The stake leaves the chip pool immediately and the game moves on to
    /// the initial deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a bet, the amount is zero,
    /// above the table limit, or above the player's chips.
    pub fn place_bet(&self, amount: usize) -> Result<Self, BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.options.bet_limit {
            return Err(BetError::OverLimit {
                amount,
                limit: self.options.bet_limit,
            });
        }
        if amount > self.chips {
            return Err(BetError::InsufficientChips {
                amount,
                chips: self.chips,
            });
        }

        let mut next = self.clone();
        next.chips -= amount;
        next.current_bet = amount;
        next.state = GameState::InitialDeal;
        info!(amount, chips = next.chips, "bet placed");
        Ok(next)
    }

    /// Multiplies the current bet by `factor`, taking the difference from the
    /// chip pool.
    ///
    /// The table limit applies to the opening bet only, so a doubled bet may
    /// exceed it.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the chips cannot cover the
    /// increase.
    pub fn scale_bet(&self, factor: usize) -> Result<Self, BetError> {
        let new_bet = self.current_bet.saturating_mul(factor);
        let needed = new_bet.saturating_sub(self.current_bet);
        if needed > self.chips {
            return Err(BetError::InsufficientFunds {
                needed,
                chips: self.chips,
            });
        }

        let mut next = self.clone();
        next.chips -= needed;
        next.current_bet = new_bet;
        Ok(next)
    }

    /// Pays out the current bet according to `outcome` and clears it.
    #[must_use]
    pub fn resolve_bet(&self, outcome: Outcome) -> Self {
        let mut next = self.clone();
        let payout = outcome.payout(self.current_bet);
        next.chips += payout;
        next.current_bet = 0;
        info!(%outcome, bet = self.current_bet, payout, chips = next.chips, "bet resolved");
        next
    }

    /// Returns whether the player has nothing left, staked or not.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.chips == 0 && self.current_bet == 0
    }
}

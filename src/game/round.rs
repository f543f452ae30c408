use tracing::info;

use crate::error::RoundError;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Decides how the round went for the player.
    ///
    /// Checked in order: surrender, dealer bust, push, player beats dealer
    /// (blackjack for a first-turn natural, otherwise a plain win), and
    /// finally a loss. A busted dealer therefore pays out even if the player
    /// also busted.
    #[must_use]
    pub fn determine_outcome(&self) -> Outcome {
        if self.surrendered {
            Outcome::Surrender
        } else if self.dealer.is_busted() {
            Outcome::Win
        } else if self.dealer.pushes(&self.player) {
            Outcome::Push
        } else if self.player.beats(&self.dealer) {
            if self.turns_taken == 0 && self.player.is_natural() {
                Outcome::Blackjack
            } else {
                Outcome::Win
            }
        } else {
            Outcome::Lose
        }
    }

    /// Settles a resolved round and clears the table for the next one.
    ///
    /// This pays out the bet, moves both hands to the discard pile, shuffles
    /// the discards back in if the live deck is below the reshuffle threshold,
    /// and returns to betting, or ends the session if the player is broke.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved.
    pub fn finish_round(&self) -> Result<(Self, RoundResult), RoundError> {
        if self.state != GameState::RoundResolved {
            return Err(RoundError::InvalidState);
        }

        let outcome = self.determine_outcome();
        let bet = self.current_bet;
        let mut next = self.resolve_bet(outcome);
        let payout = next.chips - self.chips;

        let player = std::mem::take(&mut next.player);
        let dealer = std::mem::take(&mut next.dealer);
        let player_total = player.top_score();
        let dealer_total = dealer.top_score();
        next.shoe.discard_cards(player.cards().iter().copied());
        next.shoe.discard_cards(dealer.cards().iter().copied());
        let reshuffled = next
            .shoe
            .reshuffle_if_below(next.options.reshuffle_threshold);

        next.turns_taken = 0;
        next.surrendered = false;
        next.state = if next.is_broke() {
            info!("player is out of chips");
            GameState::SessionEnded
        } else {
            GameState::AwaitingBet
        };

        #[expect(clippy::cast_possible_wrap, reason = "chip counts fit in isize")]
        let net = payout as isize - bet as isize;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            net,
            player_total,
            dealer_total,
            chips: next.chips,
            reshuffled,
        };

        Ok((next, result))
    }
}

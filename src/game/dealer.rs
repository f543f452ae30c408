use tracing::debug;

use crate::error::DealerError;

use super::{DealerStep, Game, GameState};

impl Game {
    /// Returns whether the dealer's current hand stands under the table rule.
    #[must_use]
    pub fn dealer_stands(&self) -> bool {
        self.options.stand_rule.stands(&self.dealer)
    }

    /// Returns whether the player was dealt 21 and has not acted since.
    fn player_has_natural(&self) -> bool {
        self.turns_taken == 0 && self.player.is_natural()
    }

    /// Performs one step of the dealer's turn.
    ///
    /// The first step turns over the hole card. Each later step either draws
    /// a card or, once the dealer stands or the player has busted, resolves
    /// the round. Against a natural the dealer never draws: the round
    /// resolves right after the reveal. Adapters that want to pace the reveal call this in a loop;
    /// the engine itself never waits.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_step(&self) -> Result<(Self, DealerStep), DealerError> {
        if self.state != GameState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let mut next = self.clone();

        if next.dealer.has_hidden() {
            next.dealer = next.dealer.with_face_up(true);
            debug!(totals = ?next.dealer.totals().to_vec(), "dealer reveals hole card");
            return Ok((next, DealerStep::Revealed));
        }

        if next.dealer_stands() || next.player.is_busted() || next.player_has_natural() {
            debug!(total = ?next.dealer.top_score(), "dealer stands");
            next.state = GameState::RoundResolved;
            return Ok((next, DealerStep::Stood));
        }

        let card = next.draw_one()?;
        debug!(%card, "dealer draws");
        next.dealer.add_card(card);
        Ok((next, DealerStep::Drew(card)))
    }

    /// Plays the dealer's turn to completion.
    ///
    /// Returns the resolved game and every step taken, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe is empty
    /// while the dealer must draw.
    pub fn dealer_play(&self) -> Result<(Self, Vec<DealerStep>), DealerError> {
        let mut game = self.clone();
        let mut steps = Vec::new();

        loop {
            let (next, step) = game.dealer_step()?;
            game = next;
            steps.push(step);
            if step == DealerStep::Stood {
                return Ok((game, steps));
            }
        }
    }
}

use tracing::{debug, info};

use crate::card::Card;
use crate::error::{ActionError, DealError};

use super::{Game, GameState, Move};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    fn first_action(&self, requested: Move) -> Result<(), ActionError> {
        if self.turns_taken != 0 {
            return Err(ActionError::InvalidMove(requested));
        }
        Ok(())
    }

    /// Deals two face-up cards to the player and an up card plus a face-down
    /// hole card to the dealer.
    ///
    /// A natural skips the player's turn; the dealer only turns over the hole
    /// card before the round resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or the shoe cannot supply
    /// four cards.
    pub fn deal(&self) -> Result<Self, DealError> {
        if self.state != GameState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        let mut next = self.clone();
        let [first, up] = next.draw_pair()?;
        let [second, hole] = next.draw_pair()?;

        next.player.add_card(first);
        next.dealer.add_card(up);
        next.player.add_card(second);
        next.dealer.add_card(hole.with_face_up(false));

        next.state = if next.player.is_natural() {
            info!("player dealt a natural");
            GameState::DealerTurn
        } else {
            GameState::PlayerTurn
        };

        Ok(next)
    }

    fn draw_pair(&mut self) -> Result<[Card; 2], DealError> {
        let cards = self.draw(2, true)?;
        Ok([cards[0], cards[1]])
    }

    /// Returns the moves the player may make right now, in menu order.
    ///
    /// Surrender and double-down are only offered before the first action;
    /// double-down also needs enough chips to match the bet. Exit is offered
    /// whenever the session is still running.
    #[must_use]
    pub fn eligible_moves(&self) -> Vec<Move> {
        match self.state {
            GameState::PlayerTurn => {
                let mut moves = vec![Move::Hit, Move::Stay];
                if self.turns_taken == 0 {
                    moves.push(Move::Surrender);
                    if self.chips >= self.current_bet {
                        moves.push(Move::DoubleDown);
                    }
                }
                moves.push(Move::Exit);
                moves
            }
            GameState::SessionEnded => Vec::new(),
            _ => vec![Move::Exit],
        }
    }

    /// Applies a player move after checking it is eligible.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidMove`] for a move not in
    /// [`eligible_moves`](Self::eligible_moves), or whatever the move itself
    /// reports.
    pub fn apply(&self, requested: Move) -> Result<Self, ActionError> {
        if !self.eligible_moves().contains(&requested) {
            return Err(ActionError::InvalidMove(requested));
        }

        match requested {
            Move::Hit => self.hit(),
            Move::Stay => self.stay(),
            Move::Surrender => self.surrender(),
            Move::DoubleDown => self.double_down(),
            Move::Exit => self.exit(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn passes to the dealer once the hand busts or reaches 21.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        let card = next.draw_one()?;
        debug!(%card, "player hits");
        next.player.add_card(card);
        next.turns_taken += 1;

        if next.player.is_busted() || next.player.is_twenty_one() {
            next.state = GameState::DealerTurn;
        }

        Ok(next)
    }

    /// Player action: Stay (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        next.state = GameState::DealerTurn;
        Ok(next)
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// Ends the round at once; the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the player has
    /// already acted this round.
    pub fn surrender(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;
        self.first_action(Move::Surrender)?;

        let mut next = self.clone();
        next.surrendered = true;
        next.state = GameState::RoundResolved;
        info!(bet = next.current_bet, "player surrendered");
        Ok(next)
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player has already
    /// acted, the chips cannot match the bet, or the shoe is empty.
    pub fn double_down(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;
        self.first_action(Move::DoubleDown)?;

        let mut next = self
            .scale_bet(2)
            .map_err(|_| ActionError::InsufficientFunds)?;
        let card = next.draw_one()?;
        debug!(%card, bet = next.current_bet, "player doubles down");
        next.player.add_card(card);
        next.turns_taken += 1;
        next.state = GameState::DealerTurn;

        Ok(next)
    }

    /// Leaves the table, ending the session whatever the round state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has already ended.
    pub fn exit(&self) -> Result<Self, ActionError> {
        if self.state == GameState::SessionEnded {
            return Err(ActionError::InvalidState);
        }

        let mut next = self.clone();
        next.state = GameState::SessionEnded;
        info!(chips = next.chips, bet = next.current_bet, "player left the table");
        Ok(next)
    }
}

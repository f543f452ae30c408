//! Drives a [`Game`] through its rounds against a presentation adapter.

use tracing::info;

use crate::error::{ActionError, BetError, SessionError};
use crate::game::{DealerStep, Game, GameState, Move};
use crate::input::BetReply;
use crate::result::RoundResult;
use crate::view::TableView;

/// Something the adapter may want to tell the player about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The engine refused a bet; the adapter will be asked again.
    BetRejected(BetError),
    /// The engine refused a move; the adapter will be asked again.
    MoveRejected(ActionError),
    /// The dealer took a step.
    Dealer(DealerStep),
    /// A round was settled.
    RoundOver(RoundResult),
}

/// The boundary between the engine and whatever shows the table.
///
/// Implementations are expected to validate raw input themselves (see
/// [`crate::input`]) and only hand back bets in range and moves from the
/// eligible list. The session still checks both and re-asks on a rejection.
pub trait Interface {
    /// Shows the table.
    fn render(&mut self, view: &TableView);

    /// Asks for a bet of at most `min(chips, bet_limit)`.
    fn request_bet(&mut self, chips: usize, bet_limit: usize) -> BetReply;

    /// Asks for one of `eligible`.
    fn request_move(&mut self, eligible: &[Move]) -> Move;

    /// Reports an event.
    fn notify(&mut self, _notice: Notice) {}

    /// Called between dealer steps; pacing lives here, never in the engine.
    fn pause(&mut self) {}
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Every settled round, in order.
    pub rounds: Vec<RoundResult>,
    /// Chips held when the session ended.
    pub final_chips: usize,
    /// Whether the session ended because the player ran out of chips.
    pub broke: bool,
}

/// A game plus the record of rounds played on it.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    rounds: Vec<RoundResult>,
}

impl Session {
    /// Starts a session on `game`.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            game,
            rounds: Vec::new(),
        }
    }

    /// Returns the current game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the rounds settled so far.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Advances the game by one transition, consulting `ui` as needed.
    ///
    /// Returns `false` once the session has ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails for a reason the player cannot
    /// fix by answering again, such as an exhausted shoe.
    pub fn step<I: Interface + ?Sized>(&mut self, ui: &mut I) -> Result<bool, SessionError> {
        match self.game.state() {
            GameState::AwaitingBet => {
                ui.render(&self.game.render());
                match ui.request_bet(self.game.chips(), self.game.bet_limit()) {
                    BetReply::Exit => self.game = self.game.exit()?,
                    BetReply::Amount(amount) => match self.game.place_bet(amount) {
                        Ok(next) => self.game = next,
                        Err(err) => ui.notify(Notice::BetRejected(err)),
                    },
                }
            }
            GameState::InitialDeal => self.game = self.game.deal()?,
            GameState::PlayerTurn => {
                ui.render(&self.game.render());
                let eligible = self.game.eligible_moves();
                let requested = ui.request_move(&eligible);
                match self.game.apply(requested) {
                    Ok(next) => self.game = next,
                    Err(err @ ActionError::InvalidMove(_)) => ui.notify(Notice::MoveRejected(err)),
                    Err(err) => return Err(err.into()),
                }
            }
            GameState::DealerTurn => {
                let (next, step) = self.game.dealer_step()?;
                self.game = next;
                ui.notify(Notice::Dealer(step));
                ui.render(&self.game.render());
                if step != DealerStep::Stood {
                    ui.pause();
                }
            }
            GameState::RoundResolved => {
                let final_table = self.game.render();
                let (next, result) = self.game.finish_round()?;
                self.game = next;
                self.rounds.push(result);
                ui.render(&final_table);
                ui.notify(Notice::RoundOver(result));
            }
            GameState::SessionEnded => return Ok(false),
        }

        Ok(true)
    }

    /// Plays until the player leaves or runs out of chips.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails in a way re-prompting cannot fix.
    pub fn run<I: Interface + ?Sized>(mut self, ui: &mut I) -> Result<SessionSummary, SessionError> {
        while self.step(ui)? {}

        let broke = self.game.is_broke();
        info!(rounds = self.rounds.len(), chips = self.game.chips(), broke, "session ended");
        Ok(SessionSummary {
            final_chips: self.game.chips(),
            rounds: self.rounds,
            broke,
        })
    }
}

//! Line-oriented terminal front end.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::card::Suit;
use crate::game::{DealerStep, Move};
use crate::input::{self, BetReply};
use crate::session::{Interface, Notice};
use crate::view::{CardView, HandView, TableView};

/// An [`Interface`] that reads answers from `input` and writes the table to
/// `output`, typically stdin and stdout.
#[derive(Debug)]
pub struct TerminalInterface<R, W> {
    input: R,
    output: W,
    color: bool,
    dealer_delay: Duration,
}

impl<R: BufRead, W: Write> TerminalInterface<R, W> {
    /// Creates a colourless terminal with no dealer pacing.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
            dealer_delay: Duration::ZERO,
        }
    }

    /// Enables or disables ANSI colour.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets the pause between dealer steps.
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Consumes the terminal and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) {
        // A closed stdout is not worth aborting the round over.
        let _ = writeln!(self.output, "{text}");
    }

    /// Prints `prompt` and reads one trimmed line; `None` on end of input.
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn colorize(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\u{1b}[{code}m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }

    fn format_card(&self, card: &CardView) -> String {
        if !card.face_up {
            return self.colorize("??", "90");
        }

        let color_code = match card.suit {
            Suit::Hearts | Suit::Diamonds => "31",
            Suit::Clubs => "32",
            Suit::Spades => "34",
        };

        let rank = card.rank.label();
        let colored_rank = if card.rank.is_face() {
            self.colorize(rank, color_code)
        } else {
            rank.to_string()
        };
        let colored_suit = self.colorize(&card.suit.to_string(), color_code);
        format!("{colored_rank}{colored_suit}")
    }

    fn format_hand(&self, hand: &HandView) -> String {
        if hand.cards.is_empty() {
            return "(no cards)".to_string();
        }
        hand.cards
            .iter()
            .map(|card| self.format_card(card))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_actions(&self, eligible: &[Move]) -> String {
        let parts: Vec<String> = Move::ALL
            .iter()
            .map(|&action| {
                let text = format!("[{}]{}", action.key(), action.label());
                if eligible.contains(&action) {
                    self.colorize(&text, "32")
                } else {
                    self.colorize(&text, "90")
                }
            })
            .collect();
        format!("Actions: {}", parts.join(" "))
    }
}

impl<R: BufRead, W: Write> Interface for TerminalInterface<R, W> {
    fn render(&mut self, view: &TableView) {
        let dealer = format!(
            "Dealer: {} ({})",
            self.format_hand(&view.dealer),
            view.dealer.score
        );
        let player = format!(
            "Player: {} ({})",
            self.format_hand(&view.player),
            view.player.score
        );

        self.say(format_args!("\nShoe: {} cards remaining", view.cards_remaining));
        self.say(dealer);
        self.say(player);
        self.say(format_args!(
            "Chips: {} | Bet: {} | Limit: {}",
            view.chips, view.current_bet, view.bet_limit
        ));
    }

    fn request_bet(&mut self, chips: usize, bet_limit: usize) -> BetReply {
        let max = chips.min(bet_limit);
        loop {
            let Some(line) = self.prompt_line(&format!("Bet amount (1-{max}, q to quit): ")) else {
                return BetReply::Exit;
            };
            match input::parse_bet(&line, chips, bet_limit) {
                Ok(reply) => return reply,
                Err(err) => self.say(err),
            }
        }
    }

    fn request_move(&mut self, eligible: &[Move]) -> Move {
        loop {
            let actions = self.format_actions(eligible);
            self.say(actions);
            let Some(line) = self.prompt_line("Action: ") else {
                return Move::Exit;
            };
            match input::parse_move(&line, eligible) {
                Ok(requested) => return requested,
                Err(err) => self.say(err),
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::BetRejected(err) => self.say(format_args!("Bet rejected: {err}")),
            Notice::MoveRejected(err) => self.say(format_args!("Move rejected: {err}")),
            Notice::Dealer(DealerStep::Revealed) => self.say("Dealer turns over the hole card."),
            Notice::Dealer(DealerStep::Drew(card)) => self.say(format_args!("Dealer draws {card}.")),
            Notice::Dealer(DealerStep::Stood) => {}
            Notice::RoundOver(result) => {
                self.say(format_args!(
                    "Result: {}. Payout {} (net {:+}). Chips: {}",
                    result.outcome, result.payout, result.net, result.chips
                ));
                if result.reshuffled {
                    self.say("Shoe reshuffled.");
                }
            }
        }
    }

    fn pause(&mut self) {
        if !self.dealer_delay.is_zero() {
            thread::sleep(self.dealer_delay);
        }
    }
}

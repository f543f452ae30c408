//! Parsing typed input into engine commands.
//!
//! Adapters own the prompt and the retry loop; these helpers only decide
//! what a line of input means so the engine never receives an out-of-range
//! bet or an ineligible move.

use crate::error::InputError;
use crate::game::Move;

/// What the player answered when asked for a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetReply {
    /// Stake this many chips.
    Amount(usize),
    /// Leave the table.
    Exit,
}

/// Interprets a bet prompt answer.
///
/// Whole numbers in `1..=min(chips, bet_limit)` are accepted. Other numbers
/// are rejected so the adapter can prompt again. Anything that is not a
/// number (including empty input or `q`) is taken as a request to leave.
///
/// # Errors
///
/// Returns [`InputError::BetOutOfRange`] for a number outside the range.
///
/// # Example
///
/// ```
/// use shoe21::input::{parse_bet, BetReply};
///
/// assert_eq!(parse_bet("25", 500, 100), Ok(BetReply::Amount(25)));
/// assert_eq!(parse_bet("q", 500, 100), Ok(BetReply::Exit));
/// assert!(parse_bet("150", 500, 100).is_err());
/// ```
pub fn parse_bet(input: &str, chips: usize, bet_limit: usize) -> Result<BetReply, InputError> {
    let max = chips.min(bet_limit);
    let Ok(amount) = input.trim().parse::<i64>() else {
        return Ok(BetReply::Exit);
    };

    match usize::try_from(amount) {
        Ok(value) if (1..=max).contains(&value) => Ok(BetReply::Amount(value)),
        _ => Err(InputError::BetOutOfRange { amount, max }),
    }
}

/// Interprets a move prompt answer against the moves on offer.
///
/// Accepts the single-letter key or the full name of a move, in any case,
/// plus a few common aliases ("stand", "double-down", "quit").
///
/// # Errors
///
/// Returns [`InputError::UnknownMove`] for input naming no move, and
/// [`InputError::IneligibleMove`] for a move not in `eligible`.
pub fn parse_move(input: &str, eligible: &[Move]) -> Result<Move, InputError> {
    let normalized = input.trim().to_lowercase();
    let requested = match normalized.as_str() {
        "h" | "hit" => Move::Hit,
        "s" | "stay" | "stand" => Move::Stay,
        "u" | "surrender" => Move::Surrender,
        "d" | "double" | "double-down" | "doubledown" => Move::DoubleDown,
        "q" | "quit" | "exit" => Move::Exit,
        _ => return Err(InputError::UnknownMove(normalized)),
    };

    if eligible.contains(&requested) {
        Ok(requested)
    } else {
        Err(InputError::IneligibleMove(requested))
    }
}

//! Display model handed to presentation adapters.

use crate::card::{Card, Rank, Suit};
use crate::game::{Game, GameState};
use crate::hand::{Hand, Holder};

/// One card as seen from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The rank.
    pub rank: Rank,
    /// The suit.
    pub suit: Suit,
    /// Whether the card is showing. Adapters should not reveal rank or suit
    /// of a face-down card.
    pub face_up: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
            face_up: card.face_up,
        }
    }
}

/// One hand as seen from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Who holds the hand.
    pub holder: Holder,
    /// The cards, in the order dealt.
    pub cards: Vec<CardView>,
    /// The visible totals not over 21 joined by `/` (e.g. `"11/21"`), or
    /// `"bust"` when none qualifies.
    pub score: String,
}

impl HandView {
    fn new(holder: Holder, hand: &Hand) -> Self {
        Self {
            holder,
            cards: hand.cards().iter().map(CardView::from).collect(),
            score: score_label(hand),
        }
    }
}

/// Everything an adapter needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand.
    pub dealer: HandView,
    /// Chips not staked.
    pub chips: usize,
    /// Chips staked on the current round.
    pub current_bet: usize,
    /// Table limit.
    pub bet_limit: usize,
    /// Cards left in the live deck.
    pub cards_remaining: usize,
    /// Round state.
    pub state: GameState,
}

/// Formats the visible totals of `hand` that do not exceed 21.
///
/// # Example
///
/// ```
/// use shoe21::{Card, Hand, Rank, Suit, view::score_label};
///
/// let hand = Hand::from_cards(vec![
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::King),
/// ]);
/// assert_eq!(score_label(&hand), "11/21");
/// ```
#[must_use]
pub fn score_label(hand: &Hand) -> String {
    let live: Vec<String> = hand
        .visible_totals()
        .iter()
        .filter(|&total| total <= 21)
        .map(|total| total.to_string())
        .collect();

    if live.is_empty() {
        "bust".to_string()
    } else {
        live.join("/")
    }
}

impl Game {
    /// Builds the display model for the current state.
    #[must_use]
    pub fn render(&self) -> TableView {
        TableView {
            player: HandView::new(Holder::Player, self.player_hand()),
            dealer: HandView::new(Holder::Dealer, self.dealer_hand()),
            chips: self.chips(),
            current_bet: self.current_bet(),
            bet_limit: self.bet_limit(),
            cards_remaining: self.cards_remaining(),
            state: self.state(),
        }
    }
}

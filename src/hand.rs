//! Hands and their soft/hard scoring.

use crate::card::{self, Card};

/// The two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holder {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// The possible totals of a hand.
///
/// A hand always has a hard total (every ace counted as 1). If it holds at
/// least one ace it also has a soft total, exactly 10 higher: at most one ace
/// is ever counted as 11, since two would already make 22.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    hard: u8,
    soft: Option<u8>,
}

impl Totals {
    /// Returns the total with every ace counted as 1.
    #[must_use]
    pub const fn hard(&self) -> u8 {
        self.hard
    }

    /// Returns the total with one ace counted as 11, if the hand has an ace.
    #[must_use]
    pub const fn soft(&self) -> Option<u8> {
        self.soft
    }

    /// Iterates over the totals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        core::iter::once(self.hard).chain(self.soft)
    }

    /// Returns the totals in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// Returns whether `total` is one of the totals.
    #[must_use]
    pub fn contains(&self, total: u8) -> bool {
        self.iter().any(|t| t == total)
    }

    /// Returns the greatest total that does not exceed 21.
    #[must_use]
    pub fn best(&self) -> Option<u8> {
        self.iter().filter(|&t| t <= 21).max()
    }
}

fn totals_of<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Totals {
    let mut hard: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        hard = hard.saturating_add(card.rank.value());
    }

    Totals {
        hard,
        soft: has_ace.then(|| hard.saturating_add(10)),
    }
}

/// An ordered set of cards held by the player or the dealer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a copy of the hand with every card turned to `face_up`.
    #[must_use]
    pub fn with_face_up(&self, face_up: bool) -> Self {
        Self::from_cards(card::set_face_up(&self.cards, face_up))
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|c| !c.face_up)
    }

    /// Scores every card, hidden or not.
    #[must_use]
    pub fn totals(&self) -> Totals {
        totals_of(&self.cards)
    }

    /// Scores only the cards that are showing.
    #[must_use]
    pub fn visible_totals(&self) -> Totals {
        totals_of(self.cards.iter().filter(|c| c.face_up))
    }

    /// Returns the best total not exceeding 21, or `None` if busted.
    #[must_use]
    pub fn top_score(&self) -> Option<u8> {
        self.totals().best()
    }

    /// Returns whether every total exceeds 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        self.top_score().is_none()
    }

    /// Returns whether every total is at least 17.
    ///
    /// A soft 17 (ace and six) still has a hard total of 7, so it does not
    /// qualify.
    #[must_use]
    pub fn all_totals_at_least_17(&self) -> bool {
        self.totals().iter().all(|t| t >= 17)
    }

    /// Returns whether 21 is among the totals.
    #[must_use]
    pub fn is_twenty_one(&self) -> bool {
        self.totals().contains(21)
    }

    /// Returns whether this is a two-card 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.is_twenty_one()
    }

    /// Returns whether the two hands tie on their best scores.
    ///
    /// Two busted hands also compare equal here.
    #[must_use]
    pub fn pushes(&self, other: &Self) -> bool {
        self.top_score() == other.top_score()
    }

    /// Returns whether this hand is live and scores higher than `other`.
    #[must_use]
    pub fn beats(&self, other: &Self) -> bool {
        !self.is_busted() && self.top_score() > other.top_score()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

//! Multi-pack decks and the shoe that recycles them.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered run of cards, consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `packs` standard packs shuffled together.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDeckCount`] when `packs` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use shoe21::Deck;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(6, &mut rng).unwrap();
    /// assert_eq!(deck.len(), 312);
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(packs: u8, rng: &mut R) -> Result<Self, DeckError> {
        if packs == 0 {
            return Err(DeckError::InvalidDeckCount);
        }

        let mut cards = Vec::with_capacity(usize::from(packs) * DECK_SIZE);
        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Ok(Self { cards })
    }

    /// Creates a deck that will deal `cards` in the given order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws `count` cards from the front.
    ///
    /// Returns the drawn cards and the remaining deck; `self` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] when fewer than `count`
    /// cards remain.
    pub fn draw(&self, count: usize) -> Result<(Vec<Card>, Self), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let (drawn, rest) = self.cards.split_at(count);
        Ok((drawn.to_vec(), Self::from_cards(rest.to_vec())))
    }

    /// Returns the cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The live deck, its discard pile, and the generator used to reshuffle them.
///
/// Carrying the generator inside the shoe keeps a cloned game fully
/// deterministic: two clones fed the same moves deal the same cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    deck: Deck,
    discard: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe of `packs` packs.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDeckCount`] when `packs` is zero.
    pub fn new(packs: u8, seed: u64) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(packs, &mut rng)?;
        Ok(Self {
            deck,
            discard: Vec::new(),
            rng,
        })
    }

    /// Replaces the live deck, keeping the discard pile and generator.
    pub(crate) fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the live deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards left in the live deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the live deck has fallen below `threshold`.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.deck.len() < threshold
    }

    /// Draws `count` cards, shuffling the discard pile back in once if the
    /// live deck is short.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] when even the reshuffled shoe
    /// cannot cover the request. The shoe is unchanged in that case.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        match self.deck.draw(count) {
            Ok((drawn, rest)) => {
                self.deck = rest;
                Ok(drawn)
            }
            Err(DeckError::InsufficientCards { remaining, .. })
                if remaining + self.discard.len() >= count =>
            {
                debug!(remaining, discard = self.discard.len(), "short deck, reshuffling mid-round");
                self.reshuffle();
                let (drawn, rest) = self.deck.draw(count)?;
                self.deck = rest;
                Ok(drawn)
            }
            Err(err) => Err(err),
        }
    }

    /// Moves cards onto the discard pile.
    pub fn discard_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discard
            .extend(cards.into_iter().map(|card| card.with_face_up(true)));
    }

    /// Shuffles the discard pile back into the live deck.
    pub fn reshuffle(&mut self) {
        let mut cards = std::mem::take(&mut self.deck.cards);
        cards.append(&mut self.discard);
        cards.shuffle(&mut self.rng);
        info!(cards = cards.len(), "shoe reshuffled");
        self.deck = Deck::from_cards(cards);
    }

    /// Reshuffles if the live deck is below `threshold`.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn reshuffle_if_below(&mut self, threshold: usize) -> bool {
        if self.needs_reshuffle(threshold) {
            self.reshuffle();
            true
        } else {
            false
        }
    }
}

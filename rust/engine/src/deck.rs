use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

/// Number of cards in a full deck; the pool never grows past it.
pub const DECK_SIZE: usize = 52;

/// The pool of undealt cards. Cards leave through [`Deck::draw`] and come back through
/// [`Deck::add_card`]; the deck itself never holds duplicates.
///
/// The random source is a type parameter so tests can shuffle deterministically.
///
/// # Examples
///
/// ```
/// use holdem_core::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.shuffle();
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 51);
///
/// deck.add_card(card);
/// assert_eq!(deck.remaining(), 52);
/// ```
#[derive(Debug)]
pub struct Deck<R = ChaCha20Rng> {
    // top of the deck is the end of the vector
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha20Rng> {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// A full, unshuffled deck drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Uniformly permutes the cards currently in the pool.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns `card` to the bottom of the pool. Duplicates and overflow are ignored.
    pub fn add_card(&mut self, card: Card) {
        if self.cards.len() < DECK_SIZE && !self.cards.contains(&card) {
            self.cards.insert(0, card);
        }
        debug_assert!(self.cards.len() <= DECK_SIZE);
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

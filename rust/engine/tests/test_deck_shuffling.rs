use std::collections::HashSet;

use holdem_core::cards::{full_deck, Card, Rank, Suit};
use holdem_core::deck::{Deck, DECK_SIZE};
use holdem_core::errors::DeckError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn new_deck_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.draw().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::with_rng(ChaCha8Rng::seed_from_u64(9));
    deck.shuffle();
    let mut cards = deck.cards().to_vec();
    cards.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(cards, expected);
}

#[test]
fn returned_card_leaves_multiset_unchanged() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    let card = deck.draw().unwrap();
    assert!(!deck.contains(&card));
    deck.add_card(card);

    let mut cards = deck.cards().to_vec();
    cards.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(cards, expected);
}

#[test]
fn add_card_ignores_duplicates_and_overflow() {
    let mut deck = Deck::new_with_seed(5);
    let ace = Card::new(Rank::Ace, Suit::Spades);
    deck.add_card(ace);
    assert_eq!(deck.remaining(), DECK_SIZE);

    let drawn = deck.draw().unwrap();
    deck.add_card(drawn);
    deck.add_card(drawn);
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn draw_takes_from_the_top() {
    let mut deck = Deck::new_with_seed(77);
    deck.shuffle();
    let top = *deck.cards().last().unwrap();
    assert_eq!(deck.draw(), Ok(top));
    assert_eq!(deck.remaining(), 51);
}

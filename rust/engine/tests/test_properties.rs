use holdem_core::cards::{full_deck, parse_cards, Card};
use holdem_core::deck::{Deck, DECK_SIZE};
use holdem_core::hand::{compare, evaluate_slice, HandCategory};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seven_cards() -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), 7)
}

proptest! {
    #[test]
    fn evaluation_ignores_card_order(cards in seven_cards(), seed in any::<u64>()) {
        let mut shuffled = cards.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(evaluate_slice(&cards).unwrap(), evaluate_slice(&shuffled).unwrap());
    }

    #[test]
    fn straight_flush_beats_anything_below_it(cards in seven_cards()) {
        let sf = evaluate_slice(&parse_cards("5h 6h 7h 8h 9h 2c 3d").unwrap()).unwrap();
        let other = evaluate_slice(&cards).unwrap();
        if other.category < HandCategory::StraightFlush {
            prop_assert!(compare(&sf, &other).is_gt());
        }
    }

    #[test]
    fn descriptor_fields_stay_in_range(cards in seven_cards()) {
        let r = evaluate_slice(&cards).unwrap();
        prop_assert!((1..=10).contains(&r.category.value()));
        prop_assert!((2..=14).contains(&r.primary));
        prop_assert!(r.secondary <= 14);
    }

    #[test]
    fn drawn_cards_return_to_a_full_deck(seed in any::<u64>(), n in 0usize..=DECK_SIZE) {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let drawn: Vec<Card> = (0..n).map(|_| deck.draw().unwrap()).collect();
        prop_assert_eq!(deck.remaining(), DECK_SIZE - n);
        for c in drawn {
            deck.add_card(c);
        }
        let mut cards = deck.cards().to_vec();
        cards.sort();
        let mut expected = full_deck();
        expected.sort();
        prop_assert_eq!(cards, expected);
    }
}

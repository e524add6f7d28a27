use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, CardValue};
use super::geometry::Size;

/// Distinct card values in a deck.
pub const PAIR_COUNT: u8 = 12;
pub const DECK_SIZE: usize = PAIR_COUNT as usize * 2;

/// Two face-down copies of every value, labelled `1A`, `1B`, `2A`, ... in order.
pub fn new_deck(card_size: Size) -> Vec<Card> {
    (1..=PAIR_COUNT)
        .flat_map(|value| {
            ['A', 'B']
                .into_iter()
                .map(move |copy| Card::new(format!("{value}{copy}"), CardValue(value), card_size))
        })
        .collect()
}

/// Uniform permutation in place.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::DEFAULT_CARD_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn deck_holds_two_of_each_value() {
        let deck = new_deck(DEFAULT_CARD_SIZE);
        assert_eq!(deck.len(), DECK_SIZE);
        let mut counts: HashMap<CardValue, usize> = HashMap::new();
        for card in &deck {
            *counts.entry(card.value()).or_default() += 1;
            assert!(!card.is_face_up());
        }
        assert_eq!(counts.len(), PAIR_COUNT as usize);
        assert!(counts.values().all(|&n| n == 2));
        assert_eq!(deck[0].label(), "1A");
        assert_eq!(deck[23].label(), "12B");
    }

    #[test]
    fn seeded_shuffle_is_repeatable_permutation() {
        let mut a = new_deck(DEFAULT_CARD_SIZE);
        let mut b = new_deck(DEFAULT_CARD_SIZE);
        shuffle(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle(&mut b, &mut StdRng::seed_from_u64(42));
        let labels = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.label().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(&a), labels(&b));

        let mut sorted = labels(&a);
        sorted.sort();
        let mut expected = labels(&new_deck(DEFAULT_CARD_SIZE));
        expected.sort();
        assert_eq!(sorted, expected);
    }
}

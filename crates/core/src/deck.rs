use crate::{Card, Rank, RngState, Suit};

pub const DECK_SIZE: usize = 52;

/// Draw pile plus the cards already played or discarded from it.
///
/// Cards are dealt from the back of `draw`. Spent cards never return to the
/// draw pile; a new round builds a new deck instead.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub spent: Vec<Card>,
}

impl Deck {
    /// All 52 rank/suit combinations in suit-major order, ids starting at
    /// `*next_id`. The counter is left pointing past the last id handed out.
    pub fn standard52(next_id: &mut u32) -> Self {
        let mut draw = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                draw.push(Card::new(rank, suit, *next_id));
                *next_id = next_id.wrapping_add(1);
            }
        }
        Self {
            draw,
            spent: Vec::new(),
        }
    }

    pub fn create(rng: &mut RngState, next_id: &mut u32) -> Self {
        let mut deck = Self::standard52(next_id);
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    /// Moves cards one at a time into `hand` until it holds `target` cards or
    /// the draw pile runs dry. Returns how many were dealt.
    pub fn deal(&mut self, hand: &mut Vec<Card>, target: usize) -> usize {
        let mut dealt = 0;
        while hand.len() < target {
            match self.draw.pop() {
                Some(card) => {
                    hand.push(card);
                    dealt += 1;
                }
                None => break,
            }
        }
        dealt
    }

    pub fn retire(&mut self, mut cards: Vec<Card>) {
        self.spent.append(&mut cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_every_combination_once() {
        let mut next_id = 1;
        let deck = Deck::standard52(&mut next_id);
        assert_eq!(deck.draw.len(), DECK_SIZE);
        assert_eq!(next_id, 53);
        let pairs: HashSet<(Rank, Suit)> = deck.draw.iter().map(|c| (c.rank, c.suit)).collect();
        assert_eq!(pairs.len(), DECK_SIZE);
        let ids: HashSet<u32> = deck.draw.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn deal_stops_at_target() {
        let mut rng = RngState::from_seed(3);
        let mut next_id = 0;
        let mut deck = Deck::create(&mut rng, &mut next_id);
        let mut hand = Vec::new();
        assert_eq!(deck.deal(&mut hand, 8), 8);
        assert_eq!(hand.len(), 8);
        assert_eq!(deck.remaining(), 44);
        assert_eq!(deck.deal(&mut hand, 8), 0);
    }

    #[test]
    fn deal_takes_from_the_back() {
        let mut next_id = 0;
        let mut deck = Deck::standard52(&mut next_id);
        let last = *deck.draw.last().expect("card");
        let mut hand = Vec::new();
        deck.deal(&mut hand, 1);
        assert_eq!(hand, vec![last]);
    }

    #[test]
    fn exhausted_deck_yields_short_hand() {
        let mut next_id = 0;
        let mut deck = Deck::standard52(&mut next_id);
        deck.draw.truncate(3);
        let mut hand = Vec::new();
        assert_eq!(deck.deal(&mut hand, 8), 3);
        assert_eq!(hand.len(), 3);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn shuffle_is_roughly_uniform_per_position() {
        const SAMPLES: usize = 20_000;
        let mut rng = RngState::from_seed(0x5EED);
        // counts[position][card index by id]
        let mut counts = vec![[0u32; DECK_SIZE]; DECK_SIZE];
        for _ in 0..SAMPLES {
            let mut next_id = 0;
            let deck = Deck::create(&mut rng, &mut next_id);
            for (pos, card) in deck.draw.iter().enumerate() {
                counts[pos][card.id as usize] += 1;
            }
        }
        let expected = SAMPLES as f64 / DECK_SIZE as f64;
        for row in &counts {
            for &hits in row.iter() {
                let deviation = (hits as f64 - expected).abs() / expected;
                assert!(deviation < 0.3, "hits {hits} vs expected {expected}");
            }
        }
    }
}

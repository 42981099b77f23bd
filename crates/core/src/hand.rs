use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Flush,
    FullHouse,
    FourOfAKind,
}

impl HandKind {
    pub const ALL: [HandKind; 7] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::ThreeOfAKind,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::FourOfAKind,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::ThreeOfAKind => "three_of_a_kind",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::FourOfAKind => "four_of_a_kind",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
        }
    }

    /// Scoring multiplier for the pattern.
    pub fn rarity(self) -> u64 {
        match self {
            HandKind::HighCard => 1,
            HandKind::Pair => 2,
            HandKind::TwoPair => 3,
            HandKind::ThreeOfAKind => 4,
            HandKind::Flush => 5,
            HandKind::FullHouse => 6,
            HandKind::FourOfAKind => 8,
        }
    }
}

pub const FLUSH_MIN_CARDS: usize = 5;

/// Classifies a played selection. Predicates are tried from rarest to most
/// common and the first match wins, so a trips-plus-pair is a full house and
/// a flush needs at least five cards.
pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let counts: Vec<usize> = rank_counts.values().copied().collect();
    let pairs = counts.iter().filter(|&&count| count == 2).count();

    if counts.contains(&4) {
        return HandKind::FourOfAKind;
    }
    if counts.contains(&3) && counts.contains(&2) {
        return HandKind::FullHouse;
    }
    if is_flush(cards) {
        return HandKind::Flush;
    }
    if counts.contains(&3) {
        return HandKind::ThreeOfAKind;
    }
    if pairs == 2 {
        return HandKind::TwoPair;
    }
    if pairs == 1 {
        return HandKind::Pair;
    }
    HandKind::HighCard
}

fn is_flush(cards: &[Card]) -> bool {
    match cards.first() {
        Some(first) if cards.len() >= FLUSH_MIN_CARDS => {
            cards.iter().all(|card| card.suit == first.suit)
        }
        _ => false,
    }
}

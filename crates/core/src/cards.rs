use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "♠" | "S" | "s" => Some(Suit::Spades),
            "♥" | "H" | "h" => Some(Suit::Hearts),
            "♦" | "D" | "d" => Some(Suit::Diamonds),
            "♣" | "C" | "c" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Scoring weight of the rank. Face cards are flat 10 and the ace is 15,
    /// so this is not a poker ordering.
    pub fn points(self) -> u64 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 15,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub id: u32,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit, id: u32) -> Self {
        Self { rank, suit, id }
    }

    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Self::new(rank, suit, 0)
    }

    pub fn points(&self) -> u64 {
        self.rank.points()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card `{0}`")]
pub struct CardParseError(pub String);

/// Parses `A♠`, `10♥`, `qd` style labels. The parsed card carries id 0.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let split = trimmed
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .ok_or_else(|| CardParseError(raw.to_string()))?;
        let (rank_part, suit_part) = trimmed.split_at(split);
        let rank = Rank::from_label(rank_part).ok_or_else(|| CardParseError(raw.to_string()))?;
        let suit = Suit::from_token(suit_part).ok_or_else(|| CardParseError(raw.to_string()))?;
        Ok(Card::standard(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_symbol_and_ascii_labels() {
        let ace: Card = "A♠".parse().expect("ace");
        assert_eq!(ace, Card::standard(Rank::Ace, Suit::Spades));
        let ten: Card = "10h".parse().expect("ten");
        assert_eq!(ten, Card::standard(Rank::Ten, Suit::Hearts));
        let queen: Card = "qD".parse().expect("queen");
        assert_eq!(queen.rank, Rank::Queen);
        assert_eq!(queen.suit, Suit::Diamonds);
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Card>().is_err());
        assert!("1♠".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs, 7).to_string(), "10♣");
    }

    #[test]
    fn point_values_are_flat_for_faces() {
        assert_eq!(Rank::Seven.points(), 7);
        assert_eq!(Rank::Jack.points(), 10);
        assert_eq!(Rank::King.points(), 10);
        assert_eq!(Rank::Ace.points(), 15);
    }
}

use crate::{evaluate_hand, Card, HandKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub card_points: u64,
    pub rarity: u64,
    pub total: u64,
}

pub fn card_points(cards: &[Card]) -> u64 {
    cards.iter().map(Card::points).sum()
}

/// Sum of card points times the rarity of the pattern the cards form.
pub fn score_hand(cards: &[Card]) -> ScoreBreakdown {
    let hand = evaluate_hand(cards);
    let card_points = card_points(cards);
    let rarity = hand.rarity();
    ScoreBreakdown {
        hand,
        card_points,
        rarity,
        total: card_points.saturating_mul(rarity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(labels: &[&str]) -> Vec<Card> {
        labels
            .iter()
            .map(|label| label.parse().expect("card label"))
            .collect()
    }

    #[test]
    fn ace_king_is_plain_sum() {
        let breakdown = score_hand(&cards(&["A♠", "K♥"]));
        assert_eq!(breakdown.hand, HandKind::HighCard);
        assert_eq!(breakdown.card_points, 25);
        assert_eq!(breakdown.total, 25);
    }

    #[test]
    fn trips_multiply_by_four() {
        let breakdown = score_hand(&cards(&["5♠", "5♥", "5♦"]));
        assert_eq!(breakdown.hand, HandKind::ThreeOfAKind);
        assert_eq!(breakdown.card_points, 15);
        assert_eq!(breakdown.rarity, 4);
        assert_eq!(breakdown.total, 60);
    }

    #[test]
    fn flush_counts_every_card() {
        let breakdown = score_hand(&cards(&["2♠", "5♠", "9♠", "J♠", "A♠"]));
        assert_eq!(breakdown.card_points, 2 + 5 + 9 + 10 + 15);
        assert_eq!(breakdown.total, 41 * 5);
    }

    #[test]
    fn empty_selection_scores_zero() {
        assert_eq!(score_hand(&[]).total, 0);
    }
}

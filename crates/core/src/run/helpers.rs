use crate::Card;

/// Removes the cards at `indices` (ascending, unique) and returns them in hand
/// order.
pub(super) fn take_cards(hand: &mut Vec<Card>, indices: &[usize]) -> Vec<Card> {
    let mut picked = Vec::with_capacity(indices.len());
    for &idx in indices.iter().rev() {
        if idx < hand.len() {
            picked.push(hand.remove(idx));
        }
    }
    picked.reverse();
    picked
}

pub(super) fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

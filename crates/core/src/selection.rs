use crate::Card;

/// Ids a player has picked from the hand ahead of a play or discard.
///
/// Only ids present in the hand are accepted and at most `cap` are kept, in
/// the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects or deselects `id`. Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: u32, hand: &[Card], cap: usize) -> bool {
        if let Some(pos) = self.ids.iter().position(|&picked| picked == id) {
            self.ids.remove(pos);
            return false;
        }
        if self.ids.len() >= cap || !hand.iter().any(|card| card.id == id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

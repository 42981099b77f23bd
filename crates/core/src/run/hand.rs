use super::helpers::{format_cards, take_cards};
use super::*;
use crate::*;
use std::collections::HashSet;
use tracing::debug;

impl RunState {
    /// Scores the selected cards and ends the round when the goal is reached
    /// or the last hand is spent. Ids not in the hand are ignored.
    pub fn try_play(
        &mut self,
        ids: &[u32],
        events: &mut EventBus,
    ) -> Result<ScoreBreakdown, RunError> {
        self.ensure_in_round()?;
        let indices = self.resolve_selection(ids)?;
        let played = take_cards(&mut self.hand, &indices);
        let breakdown = score_hand(&played);
        self.state.score = self.state.score.saturating_add(breakdown.total);
        self.state.hands_left = self.state.hands_left.saturating_sub(1);
        debug!(
            cards = %format_cards(&played),
            hand = breakdown.hand.id(),
            total = breakdown.total,
            score = self.state.score,
            hands_left = self.state.hands_left,
            "hand played"
        );
        events.push(Event::HandScored {
            hand: breakdown.hand,
            card_points: breakdown.card_points,
            rarity: breakdown.rarity,
            total: breakdown.total,
            score: self.state.score,
        });
        self.deck.retire(played);
        if self.check_outcome(events).is_none() {
            self.draw_to_hand(events);
        }
        Ok(breakdown)
    }

    pub fn play_selection(&mut self, ids: &[u32], events: &mut EventBus) -> Snapshot {
        if let Err(err) = self.try_play(ids, events) {
            self.reject("play", err, events);
        }
        self.snapshot()
    }

    /// Swaps the selected cards for new ones from the deck. Returns how many
    /// cards left the hand.
    pub fn try_discard(&mut self, ids: &[u32], events: &mut EventBus) -> Result<usize, RunError> {
        self.ensure_in_round()?;
        if self.state.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        let indices = self.resolve_selection(ids)?;
        let discarded = take_cards(&mut self.hand, &indices);
        let count = discarded.len();
        self.state.discards_left = self.state.discards_left.saturating_sub(1);
        debug!(
            cards = %format_cards(&discarded),
            discards_left = self.state.discards_left,
            "cards discarded"
        );
        events.push(Event::CardsDiscarded {
            count,
            discards_left: self.state.discards_left,
        });
        self.deck.retire(discarded);
        self.draw_to_hand(events);
        Ok(count)
    }

    pub fn discard_selection(&mut self, ids: &[u32], events: &mut EventBus) -> Snapshot {
        if let Err(err) = self.try_discard(ids, events) {
            self.reject("discard", err, events);
        }
        self.snapshot()
    }

    fn ensure_in_round(&self) -> Result<(), RunError> {
        if self.state.phase != Phase::InRound {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        Ok(())
    }

    /// Hand positions of the requested ids, in hand order. Duplicates collapse
    /// and strays are dropped before the size check.
    fn resolve_selection(&self, ids: &[u32]) -> Result<Vec<usize>, RunError> {
        let requested: HashSet<u32> = ids.iter().copied().collect();
        let indices: Vec<usize> = self
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| requested.contains(&card.id))
            .map(|(idx, _)| idx)
            .collect();
        let stray = requested.len().saturating_sub(indices.len());
        if stray > 0 {
            debug!(stray, "ignoring ids not in hand");
        }
        if indices.is_empty() {
            return Err(RunError::EmptySelection);
        }
        if indices.len() > self.rules.max_selection {
            return Err(RunError::TooManyCards {
                count: indices.len(),
                max: self.rules.max_selection,
            });
        }
        Ok(indices)
    }

    fn reject(&self, action: &str, err: RunError, events: &mut EventBus) {
        debug!(action, error = %err, "selection rejected");
        events.push(Event::SelectionRejected {
            reason: err.to_string(),
        });
    }
}

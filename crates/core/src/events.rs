use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    GameStarted {
        seed: u64,
    },
    RoundStarted {
        round: u32,
        goal: u64,
        hands: u8,
        discards: u8,
    },
    HandDealt {
        count: usize,
        deck_remaining: usize,
    },
    HandScored {
        hand: HandKind,
        card_points: u64,
        rarity: u64,
        total: u64,
        score: u64,
    },
    CardsDiscarded {
        count: usize,
        discards_left: u8,
    },
    RoundWon {
        round: u32,
        score: u64,
        goal: u64,
    },
    RoundLost {
        round: u32,
        score: u64,
        goal: u64,
    },
    SelectionRejected {
        reason: String,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

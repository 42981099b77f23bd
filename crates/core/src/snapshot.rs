use crate::{Card, GameState, Phase, RoundOutcome};
use serde::Serialize;

/// Read-only view handed to the presentation layer after every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub hand: Vec<Card>,
    pub score: u64,
    pub points_goal: u64,
    pub round: u32,
    pub hands_left: u8,
    pub discards_left: u8,
    pub deck_remaining: usize,
    pub phase: Phase,
    pub outcome: RoundOutcome,
}

impl Snapshot {
    pub fn capture(state: &GameState, hand: &[Card], deck_remaining: usize) -> Self {
        Self {
            hand: hand.to_vec(),
            score: state.score,
            points_goal: state.points_goal,
            round: state.round,
            hands_left: state.hands_left,
            discards_left: state.discards_left,
            deck_remaining,
            phase: state.phase,
            outcome: state.outcome(),
        }
    }
}

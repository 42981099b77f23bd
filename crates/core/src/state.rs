use crate::RulesConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    InRound,
    RoundWon,
    RoundLost,
}

/// What the host should announce before asking for the next round.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    #[default]
    None,
    WonRound,
    LostGame,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub round: u32,
    pub phase: Phase,
    pub score: u64,
    pub points_goal: u64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub hand_size: usize,
}

impl GameState {
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            round: 1,
            phase: Phase::InRound,
            score: 0,
            points_goal: rules.base_goal,
            hands_left: rules.hands_per_round,
            discards_left: rules.discards_per_round,
            hand_size: rules.hand_size,
        }
    }

    pub fn outcome(&self) -> RoundOutcome {
        match self.phase {
            Phase::InRound => RoundOutcome::None,
            Phase::RoundWon => RoundOutcome::WonRound,
            Phase::RoundLost => RoundOutcome::LostGame,
        }
    }

    pub fn goal_reached(&self) -> bool {
        self.score >= self.points_goal
    }
}

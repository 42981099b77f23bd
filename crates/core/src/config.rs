use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand_size must be at least 1")]
    ZeroHandSize,
    #[error("max_selection must be at least 1")]
    ZeroSelection,
    #[error("hands_per_round must be at least 1")]
    ZeroHands,
    #[error("base_goal must be at least 1")]
    ZeroGoal,
    #[error("goal_growth must be at least 1")]
    ZeroGrowth,
}

/// Tunable constants of a run. Missing fields in a rules file fall back to
/// the classic values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub hand_size: usize,
    pub max_selection: usize,
    pub hands_per_round: u8,
    pub discards_per_round: u8,
    pub base_goal: u64,
    pub goal_growth: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hand_size: 8,
            max_selection: 5,
            hands_per_round: 4,
            discards_per_round: 3,
            base_goal: 100,
            goal_growth: 2,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.max_selection == 0 {
            return Err(ConfigError::ZeroSelection);
        }
        if self.hands_per_round == 0 {
            return Err(ConfigError::ZeroHands);
        }
        if self.base_goal == 0 {
            return Err(ConfigError::ZeroGoal);
        }
        if self.goal_growth == 0 {
            return Err(ConfigError::ZeroGrowth);
        }
        Ok(())
    }

    pub fn next_goal(&self, goal: u64) -> u64 {
        goal.saturating_mul(self.goal_growth)
    }
}

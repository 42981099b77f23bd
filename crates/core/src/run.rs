use crate::{Card, Deck, GameState, Phase, RngState, RulesConfig};
use thiserror::Error;

mod hand;
mod helpers;
mod round;
mod state;

/// Why a play or discard request was turned away. The snapshot entry points
/// swallow these and leave the run untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no selected card is in the hand")]
    EmptySelection,
    #[error("selected {count} cards, at most {max} allowed")]
    TooManyCards { count: usize, max: usize },
}

/// The single owner of deck, hand and round counters for one game.
#[derive(Debug)]
pub struct RunState {
    pub rules: RulesConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub state: GameState,
    next_card_id: u32,
}

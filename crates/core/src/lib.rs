//! Rules engine for the card game. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod selection;
pub mod snapshot;
pub mod state;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use selection::*;
pub use snapshot::*;
pub use state::*;

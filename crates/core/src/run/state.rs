use super::*;
use crate::*;
use tracing::{debug, info};

impl RunState {
    pub fn new(rules: RulesConfig, seed: u64) -> Self {
        Self::from_rng(rules, RngState::from_seed(seed))
    }

    /// Builds a run and deals its first hand. Events from that first deal are
    /// dropped; hosts that want them call `start_game` again.
    pub fn from_rng(rules: RulesConfig, rng: RngState) -> Self {
        let state = GameState::new(&rules);
        let mut run = Self {
            rules,
            rng,
            deck: Deck::default(),
            hand: Vec::new(),
            state,
            next_card_id: 1,
        };
        let mut scratch_events = EventBus::default();
        run.reset_game(&mut scratch_events);
        run
    }

    /// Resets every counter to its opening value and deals from a new deck.
    pub fn start_game(&mut self, events: &mut EventBus) -> Snapshot {
        self.reset_game(events);
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.hand, self.deck.remaining())
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub(super) fn reset_game(&mut self, events: &mut EventBus) {
        self.state = GameState::new(&self.rules);
        info!(seed = self.rng.seed(), "game started");
        events.push(Event::GameStarted {
            seed: self.rng.seed(),
        });
        self.begin_round(events);
    }

    /// Replaces the deck, empties the hand and deals a fresh one.
    pub(super) fn begin_round(&mut self, events: &mut EventBus) {
        self.deck = Deck::create(&mut self.rng, &mut self.next_card_id);
        self.hand.clear();
        self.state.phase = Phase::InRound;
        debug!(
            round = self.state.round,
            goal = self.state.points_goal,
            hands = self.state.hands_left,
            discards = self.state.discards_left,
            "round started"
        );
        events.push(Event::RoundStarted {
            round: self.state.round,
            goal: self.state.points_goal,
            hands: self.state.hands_left,
            discards: self.state.discards_left,
        });
        self.draw_to_hand(events);
    }

    pub(super) fn draw_to_hand(&mut self, events: &mut EventBus) {
        let dealt = self.deck.deal(&mut self.hand, self.state.hand_size);
        if dealt > 0 {
            events.push(Event::HandDealt {
                count: dealt,
                deck_remaining: self.deck.remaining(),
            });
        }
    }
}

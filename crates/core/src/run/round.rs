use super::*;
use crate::*;
use tracing::info;

impl RunState {
    /// Moves out of the round when the goal is met or no hands remain. A goal
    /// met on the last hand counts as a win.
    pub(super) fn check_outcome(&mut self, events: &mut EventBus) -> Option<RoundOutcome> {
        if self.state.goal_reached() {
            self.state.phase = Phase::RoundWon;
            info!(
                round = self.state.round,
                score = self.state.score,
                goal = self.state.points_goal,
                "round won"
            );
            events.push(Event::RoundWon {
                round: self.state.round,
                score: self.state.score,
                goal: self.state.points_goal,
            });
            Some(RoundOutcome::WonRound)
        } else if self.state.hands_left == 0 {
            self.state.phase = Phase::RoundLost;
            info!(
                round = self.state.round,
                score = self.state.score,
                goal = self.state.points_goal,
                "round lost"
            );
            events.push(Event::RoundLost {
                round: self.state.round,
                score: self.state.score,
                goal: self.state.points_goal,
            });
            Some(RoundOutcome::LostGame)
        } else {
            None
        }
    }

    /// Runs the transition a finished round is waiting on: the next round
    /// after a win, a fresh game after a loss. Does nothing mid-round.
    pub fn advance(&mut self, events: &mut EventBus) -> Snapshot {
        match self.state.phase {
            Phase::InRound => {}
            Phase::RoundWon => self.start_next_round(events),
            Phase::RoundLost => self.reset_game(events),
        }
        self.snapshot()
    }

    /// Score carries over; the goal grows against the running total.
    fn start_next_round(&mut self, events: &mut EventBus) {
        self.state.round = self.state.round.saturating_add(1);
        self.state.points_goal = self.rules.next_goal(self.state.points_goal);
        self.state.hands_left = self.rules.hands_per_round;
        self.state.discards_left = self.rules.discards_per_round;
        self.begin_round(events);
    }
}

use crate::command::Command;
use crate::script::{ScriptAction, ScriptActionKind};
use crate::view::{help_text, render_event, render_outcome, render_status, UiLocale};
use anyhow::Context;
use icelatro_core::{EventBus, RoundOutcome, RunState, Selection, Snapshot};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal side of the game: turns commands into engine requests and prints
/// what comes back.
pub struct Session<W: Write> {
    pub run: RunState,
    pub events: EventBus,
    pub locale: UiLocale,
    pub json: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(run: RunState, locale: UiLocale, json: bool, out: W) -> Self {
        Self {
            run,
            events: EventBus::default(),
            locale,
            json,
            out,
        }
    }

    pub fn show_status(&mut self) -> anyhow::Result<()> {
        let snapshot = self.run.snapshot();
        self.emit_snapshot(&snapshot)
    }

    pub fn show_help(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", help_text(self.locale)).context("write help")
    }

    pub fn apply(&mut self, command: &Command) -> anyhow::Result<Flow> {
        match command {
            Command::Help => self.show_help()?,
            Command::Status => self.show_status()?,
            Command::Play(indices) => self.play(indices)?,
            Command::Discard(indices) => self.discard(indices)?,
            Command::Restart => {
                let snapshot = self.run.start_game(&mut self.events);
                self.events.drain().for_each(drop);
                self.emit_snapshot(&snapshot)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn apply_script_action(&mut self, action: &ScriptAction) -> anyhow::Result<()> {
        let command = match action.action {
            ScriptActionKind::Play => Command::Play(action.indices.clone()),
            ScriptActionKind::Discard => Command::Discard(action.indices.clone()),
            ScriptActionKind::Restart => Command::Restart,
        };
        self.apply(&command).map(|_| ())
    }

    fn play(&mut self, indices: &[usize]) -> anyhow::Result<()> {
        let Some(selection) = self.select(indices)? else {
            return Ok(());
        };
        let snapshot = self.run.play_selection(selection.ids(), &mut self.events);
        self.finish_request(snapshot)
    }

    fn discard(&mut self, indices: &[usize]) -> anyhow::Result<()> {
        let Some(selection) = self.select(indices)? else {
            return Ok(());
        };
        let snapshot = self.run.discard_selection(selection.ids(), &mut self.events);
        self.finish_request(snapshot)
    }

    /// Maps hand positions to card ids the way clicking cards would: at most
    /// `max_selection` cards, repeated positions toggle off.
    fn select(&mut self, indices: &[usize]) -> anyhow::Result<Option<Selection>> {
        let mut selection = Selection::new();
        for &idx in indices {
            let Some(card) = self.run.hand.get(idx) else {
                writeln!(
                    self.out,
                    "{} {idx}",
                    self.locale.text("no card at index", "nenhuma carta no índice")
                )
                .context("write error")?;
                return Ok(None);
            };
            selection.toggle(card.id, &self.run.hand, self.run.rules.max_selection);
        }
        Ok(Some(selection))
    }

    /// Prints what the request produced and, when it ended the round, the
    /// notification followed by the next round.
    fn finish_request(&mut self, snapshot: Snapshot) -> anyhow::Result<()> {
        self.flush_events()?;
        if snapshot.outcome == RoundOutcome::None {
            return self.emit_snapshot(&snapshot);
        }
        if self.json {
            self.emit_snapshot(&snapshot)?;
        } else if let Some(message) = render_outcome(self.locale, &snapshot) {
            writeln!(self.out, "{message}").context("write outcome")?;
        }
        let next = self.run.advance(&mut self.events);
        self.events.drain().for_each(drop);
        self.emit_snapshot(&next)
    }

    fn flush_events(&mut self) -> anyhow::Result<()> {
        let locale = self.locale;
        let lines: Vec<String> = self
            .events
            .drain()
            .filter_map(|event| render_event(locale, &event))
            .collect();
        if self.json {
            return Ok(());
        }
        for line in lines {
            writeln!(self.out, "{line}").context("write event")?;
        }
        Ok(())
    }

    fn emit_snapshot(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        if self.json {
            let body = serde_json::to_string(snapshot).context("serialize snapshot")?;
            writeln!(self.out, "{body}").context("write snapshot")
        } else {
            write!(self.out, "{}", render_status(self.locale, snapshot)).context("write status")?;
            writeln!(self.out).context("write status")
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

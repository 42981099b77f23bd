use icelatro_core::{Event, RoundOutcome, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLocale {
    EnUs,
    PtBr,
}

impl UiLocale {
    pub fn from_opt(value: Option<&str>) -> Self {
        let normalized = value
            .unwrap_or_default()
            .trim()
            .replace('-', "_")
            .to_ascii_lowercase();
        if normalized == "pt" || normalized.starts_with("pt_") {
            Self::PtBr
        } else {
            Self::EnUs
        }
    }

    pub fn text<'a>(self, en: &'a str, pt: &'a str) -> &'a str {
        if matches!(self, Self::PtBr) {
            pt
        } else {
            en
        }
    }
}

pub fn render_status(locale: UiLocale, snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} | {} {} pts\n",
        locale.text("Round:", "Rodada:"),
        snapshot.round,
        locale.text("Goal:", "Meta:"),
        snapshot.points_goal
    ));
    out.push_str(&format!(
        "{} {}\n",
        locale.text("Score:", "Pontuação:"),
        snapshot.score
    ));
    out.push_str(&format!(
        "{} {}   {} {}   {} {}\n",
        locale.text("Hands left:", "Mãos Restantes:"),
        snapshot.hands_left,
        locale.text("Discards left:", "Descartes Restantes:"),
        snapshot.discards_left,
        locale.text("Deck:", "Baralho:"),
        snapshot.deck_remaining
    ));
    out.push_str(&render_hand(snapshot));
    out
}

pub fn render_hand(snapshot: &Snapshot) -> String {
    snapshot
        .hand
        .iter()
        .enumerate()
        .map(|(idx, card)| format!("[{idx}] {card}"))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Message shown when a round has just ended, before the next one starts.
pub fn render_outcome(locale: UiLocale, snapshot: &Snapshot) -> Option<String> {
    match snapshot.outcome {
        RoundOutcome::None => None,
        RoundOutcome::WonRound => Some(format!(
            "{}\n{} {}",
            locale.text(
                "Congratulations! You won the round!",
                "Parabéns! Você venceu a rodada!"
            ),
            locale.text("Score:", "Pontuação:"),
            snapshot.score
        )),
        RoundOutcome::LostGame => Some(format!(
            "{}\n{} {}",
            locale.text("You lost!", "Você perdeu!"),
            locale.text("Final score:", "Pontuação final:"),
            snapshot.score
        )),
    }
}

pub fn render_event(locale: UiLocale, event: &Event) -> Option<String> {
    match event {
        Event::HandScored {
            hand,
            card_points,
            rarity,
            total,
            ..
        } => Some(format!(
            "{}: {card_points} x {rarity} = {total}",
            hand.display_name()
        )),
        Event::SelectionRejected { reason } => Some(format!(
            "{} {reason}",
            locale.text("ignored:", "ignorado:")
        )),
        _ => None,
    }
}

pub fn help_text(locale: UiLocale) -> &'static str {
    locale.text(
        "commands: play <idx..> | discard <idx..> | status | restart | quit",
        "comandos: play <idx..> | discard <idx..> | status | restart | quit",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use icelatro_core::{HandKind, Phase};

    fn snapshot(outcome: RoundOutcome) -> Snapshot {
        Snapshot {
            hand: vec!["A♠".parse().expect("card"), "10♥".parse().expect("card")],
            score: 120,
            points_goal: 100,
            round: 1,
            hands_left: 2,
            discards_left: 3,
            deck_remaining: 40,
            phase: Phase::InRound,
            outcome,
        }
    }

    #[test]
    fn locale_parsing() {
        assert_eq!(UiLocale::from_opt(Some("pt-BR")), UiLocale::PtBr);
        assert_eq!(UiLocale::from_opt(Some("pt")), UiLocale::PtBr);
        assert_eq!(UiLocale::from_opt(Some("en_US")), UiLocale::EnUs);
        assert_eq!(UiLocale::from_opt(None), UiLocale::EnUs);
    }

    #[test]
    fn status_lists_hand_with_indices() {
        let text = render_status(UiLocale::EnUs, &snapshot(RoundOutcome::None));
        assert!(text.contains("Round: 1 | Goal: 100 pts"));
        assert!(text.contains("[0] A♠  [1] 10♥"));
    }

    #[test]
    fn outcome_messages() {
        assert!(render_outcome(UiLocale::EnUs, &snapshot(RoundOutcome::None)).is_none());
        let won = render_outcome(UiLocale::PtBr, &snapshot(RoundOutcome::WonRound)).expect("won");
        assert!(won.contains("Parabéns"));
        assert!(won.contains("120"));
        let lost = render_outcome(UiLocale::EnUs, &snapshot(RoundOutcome::LostGame)).expect("lost");
        assert!(lost.starts_with("You lost!"));
    }

    #[test]
    fn scored_event_shows_the_math() {
        let event = Event::HandScored {
            hand: HandKind::ThreeOfAKind,
            card_points: 15,
            rarity: 4,
            total: 60,
            score: 60,
        };
        assert_eq!(
            render_event(UiLocale::EnUs, &event).as_deref(),
            Some("Three of a Kind: 15 x 4 = 60")
        );
    }
}

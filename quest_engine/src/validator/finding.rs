//! Findings - individual defects and advisories reported by the validator.

use quest_model::Side;
use serde::{Deserialize, Serialize};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Reported only; the verdict ignores it.
    Warning,
}

/// Where in a deck a finding was raised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardLocation {
    pub deck: String,
    pub card: usize,
    pub side: Side,
}

impl std::fmt::Display for CardLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deck '{}' card {} {}", self.deck, self.card, self.side)
    }
}

/// The kind of structural issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    /// Choice action text that does not parse.
    MalformedAction { text: String, reason: String },
    /// Mini-game button result text that does not parse.
    MalformedButton {
        game: String,
        button: usize,
        text: String,
        reason: String,
    },
    /// A `switchDeckFn` target that is not in the deck catalogue.
    MissingDeck { target: String },
    /// A `showMiniGameFn` target that is not in the mini-game catalogue.
    MissingMiniGame { target: String },
    /// `nextCard()` on the final card of a deck.
    AdvanceAtEnd,
    /// A deck with no cards.
    EmptyDeck { deck: String },
    /// A deck with a single card.
    ThinDeck { deck: String },
    /// A mini-game with no buttons.
    ButtonlessMiniGame { game: String },
    /// A deck no `switchDeckFn` path from the entry deck reaches.
    UnreachableDeck { deck: String },
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::ThinDeck { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::MalformedAction { text, reason } => {
                write!(f, "malformed action: `{text}` ({reason})")
            }
            FindingKind::MalformedButton {
                game,
                button,
                text,
                reason,
            } => write!(f, "malformed result on mini-game {game} button {button}: `{text}` ({reason})"),
            FindingKind::MissingDeck { target } => write!(f, "missing deck: {target}"),
            FindingKind::MissingMiniGame { target } => write!(f, "missing mini-game: {target}"),
            FindingKind::AdvanceAtEnd => f.write_str("advance-at-end"),
            FindingKind::EmptyDeck { deck } => write!(f, "empty deck: {deck}"),
            FindingKind::ThinDeck { deck } => write!(f, "thin deck: {deck}"),
            FindingKind::ButtonlessMiniGame { game } => write!(f, "mini-game without buttons: {game}"),
            FindingKind::UnreachableDeck { deck } => write!(f, "unreachable deck: {deck}"),
        }
    }
}

/// One reported issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: FindingKind,
    /// Set for findings raised by a specific card choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<CardLocation>,
    /// Suggested remediation. Never applied automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Finding {
    /// Create a finding; the severity follows from the kind.
    pub fn new(kind: FindingKind) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            location: None,
            hint: None,
        }
    }

    /// Attach the originating card choice.
    pub fn at(mut self, deck: impl Into<String>, card: usize, side: Side) -> Self {
        self.location = Some(CardLocation {
            deck: deck.into(),
            card,
            side,
        });
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Short message, e.g. `missing deck: skills`.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

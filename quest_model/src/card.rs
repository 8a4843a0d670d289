//! Card definitions - the narrative beats that make up a deck.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::action::{action_text, load_action, Action, InvalidAction};

/// Presentational category of a card.
///
/// Used for styling only; control flow never depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardKind {
    Main,
    Work,
    Education,
    Project,
    Skill,
    Achievement,
    Navigation,
    Personal,
    /// Any tag not known to this crate, kept verbatim.
    Custom(String),
}

impl CardKind {
    /// The tag as written in the persisted document.
    pub fn as_str(&self) -> &str {
        match self {
            CardKind::Main => "main",
            CardKind::Work => "work",
            CardKind::Education => "education",
            CardKind::Project => "project",
            CardKind::Skill => "skill",
            CardKind::Achievement => "achievement",
            CardKind::Navigation => "navigation",
            CardKind::Personal => "personal",
            CardKind::Custom(s) => s,
        }
    }

    /// Parse a tag, falling back to [`CardKind::Custom`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "main" => CardKind::Main,
            "work" => CardKind::Work,
            "education" => CardKind::Education,
            "project" => CardKind::Project,
            "skill" => CardKind::Skill,
            "achievement" => CardKind::Achievement,
            "navigation" => CardKind::Navigation,
            "personal" => CardKind::Personal,
            other => CardKind::Custom(other.to_string()),
        }
    }
}

impl Default for CardKind {
    fn default() -> Self {
        CardKind::Custom(String::new())
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CardKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CardKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(CardKind::from_tag(&tag))
    }
}

/// Which of the two choices on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// One player choice: a display label and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choice {
    pub label: String,
    /// `None` on content-only cards, and when the action text is malformed.
    pub action: Option<Action>,
    /// Set when the document's action text could not be parsed.
    pub invalid: Option<InvalidAction>,
}

impl Choice {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
            invalid: None,
        }
    }

    fn from_record(label: String, result: &str) -> Self {
        let (action, invalid) = load_action(result);
        Self {
            label,
            action,
            invalid,
        }
    }

    fn result_text(&self) -> String {
        action_text(self.action.as_ref(), self.invalid.as_ref())
    }
}

/// A single card in a deck.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CardRecord", into = "CardRecord")]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub text: String,
    pub icon: String,
    pub image_path: String,
    pub left: Choice,
    pub right: Choice,
}

impl Card {
    /// Create a card with the given kind and title.
    pub fn new(kind: CardKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the iconic label (usually an emoji).
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image_path = path.into();
        self
    }

    /// Set the left choice.
    pub fn with_left(mut self, label: impl Into<String>, action: Action) -> Self {
        self.left = Choice::new(label, action);
        self
    }

    /// Set the right choice.
    pub fn with_right(mut self, label: impl Into<String>, action: Action) -> Self {
        self.right = Choice::new(label, action);
        self
    }

    /// Get one of the two choices.
    pub fn choice(&self, side: Side) -> &Choice {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Iterate over `(side, action)` for every choice that has an action.
    pub fn actions(&self) -> impl Iterator<Item = (Side, &Action)> {
        Side::BOTH
            .into_iter()
            .filter_map(move |side| self.choice(side).action.as_ref().map(|a| (side, a)))
    }
}

/// Flat wire shape of a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CardRecord {
    #[serde(rename = "type")]
    kind: CardKind,
    title: String,
    text: String,
    icon: String,
    image_path: String,
    left_choice: String,
    right_choice: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    left_result: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    right_result: String,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            kind: record.kind,
            title: record.title,
            text: record.text,
            icon: record.icon,
            image_path: record.image_path,
            left: Choice::from_record(record.left_choice, &record.left_result),
            right: Choice::from_record(record.right_choice, &record.right_result),
        }
    }
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self {
            left_result: card.left.result_text(),
            right_result: card.right.result_text(),
            kind: card.kind,
            title: card.title,
            text: card.text,
            icon: card.icon,
            image_path: card.image_path,
            left_choice: card.left.label,
            right_choice: card.right.label,
        }
    }
}

/// A flavour card outside of every deck (interests, hobbies).
///
/// Personal cards carry no choices, so they take no part in navigation checks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub text: String,
    pub icon: String,
    pub image_path: String,
}

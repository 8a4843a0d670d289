//! Mini-game definitions.

use serde::{Deserialize, Serialize};

use crate::action::{action_text, load_action, Action, InvalidAction};

/// A button inside a mini-game.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "ButtonRecord", into = "ButtonRecord")]
pub struct Button {
    pub text: String,
    /// Effect-only in practice; mini-games are leaves.
    pub result: Option<Action>,
    /// Set when the document's result text could not be parsed.
    pub invalid: Option<InvalidAction>,
}

impl Button {
    pub fn new(text: impl Into<String>, result: Action) -> Self {
        Self {
            text: text.into(),
            result: Some(result),
            invalid: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ButtonRecord {
    text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    result: String,
}

impl From<ButtonRecord> for Button {
    fn from(record: ButtonRecord) -> Self {
        let (result, invalid) = load_action(&record.result);
        Self {
            text: record.text,
            result,
            invalid,
        }
    }
}

impl From<Button> for ButtonRecord {
    fn from(button: Button) -> Self {
        Self {
            result: action_text(button.result.as_ref(), button.invalid.as_ref()),
            text: button.text,
        }
    }
}

/// A leaf interaction: a prompt and a set of buttons.
///
/// What happens after a button is pressed is up to the game host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MiniGame {
    pub title: String,
    pub description: String,
    pub buttons: Vec<Button>,
}

impl MiniGame {
    /// Create a mini-game with no buttons yet.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            buttons: Vec::new(),
        }
    }

    /// Add a button.
    pub fn with_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

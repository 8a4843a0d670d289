//! Actions - what happens when the player picks a side of a card.
//!
//! In the persisted document an action is a small call-expression string such as
//! `addSkillFn("Rust"); increaseStatsFn(2, 0, 0); nextCard()`. That string is parsed
//! exactly once, at construction or load time, into the structured [`Action`] below.

mod parser;

pub use parser::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Call name that switches to another deck.
pub const SWITCH_DECK_FN: &str = "switchDeckFn";

/// Call name that opens a mini-game.
pub const SHOW_MINI_GAME_FN: &str = "showMiniGameFn";

/// Call name that advances to the following card in the same deck.
pub const NEXT_CARD_FN: &str = "nextCard";

/// An opaque scoring or inventory effect, e.g. `increaseStatsFn(2, 0, 1)`.
///
/// The arguments are kept as raw source text; nothing in the graph interprets them.
/// Effect text that is not call-shaped is kept verbatim in `name` with `args` unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EffectCall {
    pub name: String,
    pub args: Option<String>,
}

impl EffectCall {
    /// Create an effect call from a function name and its raw argument text.
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Some(args.into()),
        }
    }

    /// Keep effect text that is not a call expression as-is.
    pub fn opaque(text: impl Into<String>) -> Self {
        Self {
            name: text.into(),
            args: None,
        }
    }

    pub fn is_call(&self) -> bool {
        self.args.is_some()
    }
}

impl fmt::Display for EffectCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.args {
            Some(args) => write!(f, "{}({args})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// An action field whose text could not be parsed.
///
/// Kept on the card or button so the document still loads and the defect is reported
/// alongside every other finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAction {
    pub text: String,
    pub error: ActionParseError,
}

/// Parse an action field read from a document.
///
/// Returns the parsed action (if any) and, when the text is malformed, the text and the
/// parse error in place of the action.
pub fn load_action(text: &str) -> (Option<Action>, Option<InvalidAction>) {
    match parse_action(text) {
        Ok(action) => (action, None),
        Err(error) => (
            None,
            Some(InvalidAction {
                text: text.trim().to_string(),
                error,
            }),
        ),
    }
}

/// The document text for an action field: the unparsed text if it was malformed,
/// otherwise the canonical rendering.
pub fn action_text(action: Option<&Action>, invalid: Option<&InvalidAction>) -> String {
    match (invalid, action) {
        (Some(invalid), _) => invalid.text.clone(),
        (None, Some(action)) => action.to_string(),
        (None, None) => String::new(),
    }
}

/// The outcome of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Transfer control to the first card of the named deck.
    SwitchDeck(String),

    /// Open the named mini-game.
    ShowMiniGame(String),

    /// Advance to the following card of the same deck.
    NextCard,

    /// Scoring or inventory side effects with no navigation.
    Effect(Vec<EffectCall>),

    /// Side effects followed by a navigational action.
    ///
    /// `then` is always one of `SwitchDeck`, `ShowMiniGame` or `NextCard`;
    /// [`Action::composite`] normalises anything else away.
    Composite {
        effects: Vec<EffectCall>,
        then: Box<Action>,
    },
}

/// A navigational reference extracted from an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Navigation<'a> {
    SwitchDeck(&'a str),
    ShowMiniGame(&'a str),
    NextCard,
}

impl Action {
    /// Create a deck switch.
    pub fn switch_deck(deck: impl Into<String>) -> Self {
        Action::SwitchDeck(deck.into())
    }

    /// Create a mini-game launch.
    pub fn show_mini_game(game: impl Into<String>) -> Self {
        Action::ShowMiniGame(game.into())
    }

    /// Create an effect-only action.
    pub fn effects(calls: impl IntoIterator<Item = EffectCall>) -> Self {
        Action::Effect(calls.into_iter().collect())
    }

    /// Run `effects`, then `then`.
    ///
    /// Nested effects are flattened so the result is always one of the
    /// five canonical shapes.
    pub fn composite(effects: impl IntoIterator<Item = EffectCall>, then: Action) -> Self {
        let mut effects: Vec<EffectCall> = effects.into_iter().collect();
        let then = match then {
            Action::Effect(more) => {
                effects.extend(more);
                return Action::Effect(effects);
            }
            Action::Composite {
                effects: more,
                then,
            } => {
                effects.extend(more);
                *then
            }
            nav => nav,
        };

        if effects.is_empty() {
            then
        } else {
            Action::Composite {
                effects,
                then: Box::new(then),
            }
        }
    }

    /// The navigational part of this action, looking through composites.
    ///
    /// Returns `None` for pure effects.
    pub fn navigation(&self) -> Option<Navigation<'_>> {
        match self {
            Action::SwitchDeck(deck) => Some(Navigation::SwitchDeck(deck)),
            Action::ShowMiniGame(game) => Some(Navigation::ShowMiniGame(game)),
            Action::NextCard => Some(Navigation::NextCard),
            Action::Effect(_) => None,
            Action::Composite { then, .. } => then.navigation(),
        }
    }

    /// The effect calls carried by this action, in order.
    pub fn effect_calls(&self) -> &[EffectCall] {
        match self {
            Action::Effect(calls) | Action::Composite { effects: calls, .. } => calls,
            _ => &[],
        }
    }

    /// The deck this action switches to, if any.
    pub fn target_deck(&self) -> Option<&str> {
        match self.navigation() {
            Some(Navigation::SwitchDeck(deck)) => Some(deck),
            _ => None,
        }
    }

    /// Whether the action has any navigational meaning.
    pub fn is_navigational(&self) -> bool {
        self.navigation().is_some()
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        if c == '"' || c == '\\' {
            write!(f, "\\{c}")?;
        } else {
            write!(f, "{c}")?;
        }
    }
    f.write_str("\"")
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SwitchDeck(deck) => {
                write!(f, "{SWITCH_DECK_FN}(")?;
                write_quoted(f, deck)?;
                f.write_str(")")
            }
            Action::ShowMiniGame(game) => {
                write!(f, "{SHOW_MINI_GAME_FN}(")?;
                write_quoted(f, game)?;
                f.write_str(")")
            }
            Action::NextCard => write!(f, "{NEXT_CARD_FN}()"),
            Action::Effect(calls) => {
                for (i, call) in calls.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{call}")?;
                }
                Ok(())
            }
            Action::Composite { effects, then } => {
                for call in effects {
                    write!(f, "{call}; ")?;
                }
                write!(f, "{then}")
            }
        }
    }
}

impl std::str::FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_action(s)?.ok_or(ActionParseError::Empty)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_flattens_effects() {
        let inner = Action::composite(
            [EffectCall::new("increaseStatsFn", "1, 0, 0")],
            Action::NextCard,
        );
        let outer = Action::composite([EffectCall::new("addSkillFn", "\"Rust\"")], inner);

        match &outer {
            Action::Composite { effects, then } => {
                assert_eq!(effects.len(), 2);
                assert_eq!(effects[0].name, "addSkillFn");
                assert_eq!(**then, Action::NextCard);
            }
            other => panic!("expected composite, got {other:?}"),
        }
    }

    #[test]
    fn test_composite_without_effects_is_atomic() {
        let action = Action::composite(Vec::new(), Action::switch_deck("main"));
        assert_eq!(action, Action::SwitchDeck("main".to_string()));
    }

    #[test]
    fn test_composite_with_effect_tail_is_effect() {
        let action = Action::composite(
            [EffectCall::new("a", "")],
            Action::effects([EffectCall::new("b", "")]),
        );
        assert!(matches!(action, Action::Effect(ref calls) if calls.len() == 2));
        assert!(action.navigation().is_none());
    }

    #[test]
    fn test_navigation_through_composite() {
        let action = Action::composite(
            [EffectCall::new("addSkillFn", "\"Go\"")],
            Action::show_mini_game("teachingChallenge"),
        );
        assert_eq!(
            action.navigation(),
            Some(Navigation::ShowMiniGame("teachingChallenge"))
        );
        assert_eq!(action.effect_calls().len(), 1);
        assert!(action.target_deck().is_none());
    }

    #[test]
    fn test_display_canonical_form() {
        let action = Action::composite(
            [
                EffectCall::new("addSkillFn", "\"Python\""),
                EffectCall::new("increaseStatsFn", "2, 0, 0"),
            ],
            Action::NextCard,
        );
        assert_eq!(
            action.to_string(),
            "addSkillFn(\"Python\"); increaseStatsFn(2, 0, 0); nextCard()"
        );
        assert_eq!(Action::switch_deck("work").to_string(), "switchDeckFn(\"work\")");
    }

    #[test]
    fn test_display_escapes_quotes() {
        let action = Action::switch_deck("say \"hi\"");
        assert_eq!(action.to_string(), r#"switchDeckFn("say \"hi\"")"#);
        let reparsed: Action = action.to_string().parse().unwrap();
        assert_eq!(reparsed, action);
    }

    #[test]
    fn test_serde_as_string() {
        let action = Action::show_mini_game("personalValues");
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#""showMiniGameFn(\"personalValues\")""#);

        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_opaque_effect_display() {
        let action = Action::composite([EffectCall::opaque("celebrate loudly")], Action::NextCard);
        assert_eq!(action.to_string(), "celebrate loudly; nextCard()");
        assert!(!action.effect_calls()[0].is_call());
    }

    #[test]
    fn test_load_action_keeps_malformed_text() {
        let (action, invalid) = load_action(" switchDeckFn(main) ");
        assert!(action.is_none());
        let invalid = invalid.unwrap();
        assert_eq!(invalid.text, "switchDeckFn(main)");
        assert!(matches!(invalid.error, ActionParseError::BadTarget { .. }));
        assert_eq!(action_text(None, Some(&invalid)), "switchDeckFn(main)");

        assert_eq!(load_action(""), (None, None));
        let (action, invalid) = load_action("nextCard()");
        assert_eq!(action, Some(Action::NextCard));
        assert!(invalid.is_none());
    }

    #[test]
    fn test_deserialize_rejects_empty_required_action() {
        let result: Result<Action, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}

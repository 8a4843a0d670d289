//! Parser for the action-encoding grammar.
//!
//! ```text
//! action     := (segment (";" segment)*)? ";"?
//! segment    := effect | navigation
//! effect     := ident "(" args ")" | <any other text>
//! navigation := switchDeckFn(<quoted>) | showMiniGameFn(<quoted>) | nextCard()
//! ```
//!
//! Zero or more effects may precede at most one navigational call, which must come
//! last. Quoted names may use either single or double quotes.
//!
//! Only navigation is parsed strictly. Effect text is opaque to the graph, so an
//! effect that is not call-shaped, or that carries an apostrophe or stray quote, is
//! kept verbatim rather than rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::{Action, EffectCall, NEXT_CARD_FN, SHOW_MINI_GAME_FN, SWITCH_DECK_FN};

static CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^([A-Za-z_$][A-Za-z0-9_$.]*)\s*\((.*)\)$").expect("valid call regex")
});

static LEADING_IDENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$.]*)\s*(?:\(|$)").expect("valid identifier regex")
});

static QUOTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)^\s*(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')\s*$"#)
        .expect("valid quoted-argument regex")
});

/// Errors produced while parsing an action string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("action text is empty")]
    Empty,

    #[error("`{0}` is not a call expression")]
    NotACall(String),

    #[error("`{call}` expects exactly one non-empty quoted name, got `{args}`")]
    BadTarget { call: String, args: String },

    #[error("`nextCard()` takes no arguments, got `{0}`")]
    NextCardArguments(String),

    #[error("more than one navigational call in `{0}`")]
    MultipleNavigation(String),

    #[error("navigational call must be the last call in `{0}`")]
    NavigationNotLast(String),
}

/// Parse an action string.
///
/// Whitespace-only text yields `Ok(None)`: the choice simply has no action.
pub fn parse_action(text: &str) -> Result<Option<Action>, ActionParseError> {
    let segments = split_segments(text);
    if segments.is_empty() {
        return Ok(None);
    }

    let mut effects = Vec::new();
    let mut navigation: Option<Action> = None;

    for segment in segments {
        match (parse_segment(segment)?, &navigation) {
            (Segment::Navigation(_), Some(_)) => {
                return Err(ActionParseError::MultipleNavigation(text.trim().to_string()))
            }
            (Segment::Navigation(nav), None) => navigation = Some(nav),
            (Segment::Effect(_), Some(_)) => {
                return Err(ActionParseError::NavigationNotLast(text.trim().to_string()))
            }
            (Segment::Effect(call), None) => effects.push(call),
        }
    }

    Ok(Some(match navigation {
        Some(nav) => Action::composite(effects, nav),
        None => Action::Effect(effects),
    }))
}

enum Segment {
    Effect(EffectCall),
    Navigation(Action),
}

fn parse_segment(segment: &str) -> Result<Segment, ActionParseError> {
    let ident = LEADING_IDENT_RE
        .captures(segment)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());

    let Some(name @ (SWITCH_DECK_FN | SHOW_MINI_GAME_FN | NEXT_CARD_FN)) = ident else {
        return Ok(Segment::Effect(match CALL_RE.captures(segment) {
            Some(captures) => EffectCall::new(&captures[1], captures[2].trim()),
            None => EffectCall::opaque(segment),
        }));
    };

    let captures = CALL_RE
        .captures(segment)
        .ok_or_else(|| ActionParseError::NotACall(segment.to_string()))?;
    let args = captures[2].trim();

    let nav = match name {
        SWITCH_DECK_FN => Action::SwitchDeck(quoted_target(name, args)?),
        SHOW_MINI_GAME_FN => Action::ShowMiniGame(quoted_target(name, args)?),
        _ if !args.is_empty() => return Err(ActionParseError::NextCardArguments(args.to_string())),
        _ => Action::NextCard,
    };
    Ok(Segment::Navigation(nav))
}

/// Split on `;` outside of quotes, dropping empty segments.
///
/// A `'` directly after a letter or digit is an apostrophe, not a quote. If quotes
/// are still unbalanced the text is split on every `;` instead.
fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' if prev.is_some_and(char::is_alphanumeric) => {}
                '"' | '\'' => quote = Some(c),
                ';' => {
                    segments.push(text[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            },
        }
        prev = Some(c);
    }

    if quote.is_some() {
        segments = text.split(';').map(str::trim).collect();
    } else {
        segments.push(text[start..].trim());
    }
    segments.retain(|s| !s.is_empty());
    segments
}

fn quoted_target(call: &str, args: &str) -> Result<String, ActionParseError> {
    let bad_target = || ActionParseError::BadTarget {
        call: call.to_string(),
        args: args.to_string(),
    };

    let captures = QUOTED_RE.captures(args).ok_or_else(bad_target)?;
    let raw = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();
    let target = unescape(raw);

    if target.trim().is_empty() {
        return Err(bad_target());
    }
    Ok(target)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

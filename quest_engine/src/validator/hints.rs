//! Remediation hints for dangling references, unreachable decks and malformed actions.

use quest_model::ActionParseError;

/// Largest edit distance still offered as a "did you mean" suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Levenshtein distance between two strings, by characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// The closest known name within the suggestion threshold.
///
/// Ties resolve to the earliest name in `known`.
pub fn closest<'a>(target: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    known
        .into_iter()
        .map(|name| (edit_distance(target, name), name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

/// Hint for a reference to a name missing from a catalogue.
pub fn missing_target_hint(what: &str, target: &str, known: &[&str]) -> String {
    match closest(target, known.iter().copied()) {
        Some(name) => format!("did you mean '{name}'? Otherwise add a {what} named '{target}'"),
        None if known.is_empty() => format!("add a {what} named '{target}'"),
        None => format!(
            "add a {what} named '{target}' or point this choice at one of: {}",
            known.join(", ")
        ),
    }
}

/// Hint for a deck nothing reaches.
pub fn unreachable_hint(deck: &str, entry: &str, entry_exists: bool) -> String {
    if entry_exists {
        format!("add a switchDeckFn(\"{deck}\") choice to a deck reachable from '{entry}'")
    } else {
        format!("no entry deck '{entry}' exists; add one that leads to '{deck}'")
    }
}

/// Hint for action text that does not parse.
pub fn malformed_action_hint(error: &ActionParseError) -> String {
    match error {
        ActionParseError::BadTarget { call, .. } => {
            format!("quote the target name, e.g. {call}(\"name\")")
        }
        ActionParseError::NotACall(_) => {
            "write navigation as a complete call, e.g. switchDeckFn(\"name\")".to_string()
        }
        ActionParseError::NextCardArguments(_) => "write nextCard() with no arguments".to_string(),
        ActionParseError::MultipleNavigation(_) => {
            "keep a single navigational call per choice".to_string()
        }
        ActionParseError::NavigationNotLast(_) => {
            "move the navigational call after every effect".to_string()
        }
        ActionParseError::Empty => "remove the empty action".to_string(),
    }
}

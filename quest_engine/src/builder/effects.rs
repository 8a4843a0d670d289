//! Effect calls used by generated cards and mini-games.

use quest_model::EffectCall;

/// `addSkillFn("<skill>")`
pub fn add_skill(skill: &str) -> EffectCall {
    EffectCall::new("addSkillFn", quote(skill))
}

/// `increaseStatsFn(<a>, <b>, <c>)`
pub fn increase_stats(a: u8, b: u8, c: u8) -> EffectCall {
    EffectCall::new("increaseStatsFn", format!("{a}, {b}, {c}"))
}

/// `showNotificationFn("<message>")`
pub fn notify(message: &str) -> EffectCall {
    EffectCall::new("showNotificationFn", quote(message))
}

/// Double-quote a string argument, escaping quotes and backslashes.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

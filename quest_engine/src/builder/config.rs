//! Builder configuration: content pacing and experience partition rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cards kept per experience sub-deck (military, academic, industry).
pub const EXPERIENCE_CARD_CAP: usize = 2;

/// Cards kept in the education deck.
pub const EDUCATION_CARD_CAP: usize = 3;

/// Cards kept in the projects deck.
pub const PROJECT_CARD_CAP: usize = 4;

/// Cards kept in the skills deck.
pub const SKILL_CARD_CAP: usize = 5;

/// How many core skills are considered before the skills cap applies.
pub const SKILL_SOURCE_WINDOW: usize = 6;

/// Errors raised while reading a builder configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid builder configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Per-deck card caps.
///
/// Records beyond a cap are dropped to bound play length. The navigation card
/// appended to every generated deck does not count towards the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingLimits {
    pub military: usize,
    pub academic: usize,
    pub industry: usize,
    pub education: usize,
    pub projects: usize,
    pub skills: usize,
    pub skill_source_window: usize,
}

impl Default for PacingLimits {
    fn default() -> Self {
        Self {
            military: EXPERIENCE_CARD_CAP,
            academic: EXPERIENCE_CARD_CAP,
            industry: EXPERIENCE_CARD_CAP,
            education: EDUCATION_CARD_CAP,
            projects: PROJECT_CARD_CAP,
            skills: SKILL_CARD_CAP,
            skill_source_window: SKILL_SOURCE_WINDOW,
        }
    }
}

/// Substring rules that sort experience entries into sub-decks.
///
/// Rules are tried in the order military, academic, industry; the first match wins,
/// so the three sub-decks never share an entry. Entries matching nothing are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffiliationRules {
    /// Matched against the organisation name.
    pub military_organizations: Vec<String>,
    /// Matched against the organisation name.
    pub academic_organizations: Vec<String>,
    /// Matched against the role title.
    pub industry_titles: Vec<String>,
}

impl Default for AffiliationRules {
    fn default() -> Self {
        Self {
            military_organizations: vec!["RAN".to_string(), "HQADF".to_string()],
            academic_organizations: vec!["University".to_string()],
            industry_titles: vec!["Consultant".to_string(), "Contractor".to_string()],
        }
    }
}

/// Full builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub pacing: PacingLimits,
    pub affiliations: AffiliationRules,
}

impl BuilderConfig {
    /// Parse a configuration from TOML. Omitted keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

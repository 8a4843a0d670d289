//! Career profile - the structured input the graph builder reads.
//!
//! Every field is optional in the source YAML. Absent sections become empty
//! lists and absent strings become empty, so a sparse profile still builds.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while reading a profile document.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("invalid profile YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The whole career profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub achievements: Vec<Achievement>,
    #[serde(deserialize_with = "lenient_strings")]
    pub interests: Vec<String>,
}

impl Profile {
    /// Parse a profile from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ProfileError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Identity and contact details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
}

/// One role in the employment history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub organization: String,
    #[serde(deserialize_with = "lenient_string")]
    pub period: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub responsibilities: Vec<String>,
}

/// A degree or qualification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub field: String,
    #[serde(deserialize_with = "lenient_string")]
    pub institution: String,
    /// Written as a bare number or a range string in the YAML.
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

/// Skill listing. Only the core programming skills feed the card game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub programming: ProgrammingSkills,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgrammingSkills {
    #[serde(deserialize_with = "lenient_strings")]
    pub core: Vec<String>,
}

/// Card title for achievements that do not carry one.
pub const DEFAULT_ACHIEVEMENT_TITLE: &str = "Achievement Unlocked";

/// An achievement, either a titled entry or a bare line of text.
///
/// Mappings are tried first; any scalar is read as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Achievement {
    Detailed {
        #[serde(default, deserialize_with = "lenient_string")]
        title: String,
        #[serde(default, deserialize_with = "lenient_string")]
        description: String,
    },
    Text(#[serde(deserialize_with = "lenient_string")] String),
}

impl Achievement {
    /// Card title for this achievement.
    pub fn title(&self) -> &str {
        match self {
            Achievement::Detailed { title, .. } if !title.trim().is_empty() => title,
            _ => DEFAULT_ACHIEVEMENT_TITLE,
        }
    }

    /// Card body for this achievement.
    pub fn description(&self) -> &str {
        match self {
            Achievement::Text(text) => text,
            Achievement::Detailed { description, .. } => description,
        }
    }
}

/// Accept strings, numbers, booleans and null wherever a string is expected.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    value_to_string(serde_yaml::Value::deserialize(deserializer)?)
}

/// A list of [`lenient_string`] items. Null reads as an empty list.
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<serde_yaml::Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(value_to_string)
        .collect()
}

fn value_to_string<E: serde::de::Error>(value: serde_yaml::Value) -> Result<String, E> {
    Ok(match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .map_err(E::custom)?,
    })
}

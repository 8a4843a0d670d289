//! Narrative Graph Builder - maps a career profile onto the deck graph.
//!
//! Construction is deterministic and never fails: missing profile data becomes
//! empty sections or placeholder text, and any resulting thin or empty deck is left
//! for the validator to report.
//!
//! Deck layout:
//! 1. **Hubs**: `main`, `professional`, `personal` and `work` are fixed choice cards
//! 2. **Experience**: entries are partitioned into `military`, `academic` and `industry`
//! 3. **Sections**: `education`, `projects`, `skills` map one record to one card
//! 4. **Closing**: `achievements` ends with a card that returns to `main`

mod config;
mod effects;
mod minigames;
mod sections;

pub use config::*;
pub use effects::*;
pub use minigames::*;
pub use sections::*;

use quest_model::{Action, Card, CardKind, Deck, QuestGraph, ENTRY_DECK};

use crate::profile::Profile;

pub const MAIN: &str = ENTRY_DECK;
pub const PROFESSIONAL: &str = "professional";
pub const PERSONAL: &str = "personal";
pub const WORK: &str = "work";
pub const EDUCATION: &str = "education";
pub const MILITARY: &str = "military";
pub const ACADEMIC: &str = "academic";
pub const INDUSTRY: &str = "industry";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const ACHIEVEMENTS: &str = "achievements";

/// Used in card text when the profile has no name.
pub const PLACEHOLDER_NAME: &str = "the author";

/// Builds a [`QuestGraph`] from a [`Profile`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: BuilderConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default pacing and partition rules.
    pub fn with_defaults() -> Self {
        Self::new(BuilderConfig::default())
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the complete graph.
    pub fn build(&self, profile: &Profile) -> QuestGraph {
        let name = if profile.personal.name.trim().is_empty() {
            log::warn!("profile has no personal name, using placeholder");
            PLACEHOLDER_NAME
        } else {
            profile.personal.name.as_str()
        };
        let limits = &self.config.pacing;
        let rules = &self.config.affiliations;

        let mut graph = QuestGraph::new();
        let decks = &mut graph.card_decks;

        decks.insert(MAIN, main_deck(profile, name));
        decks.insert(PROFESSIONAL, professional_deck(name));
        decks.insert(PERSONAL, personal_deck(name));
        decks.insert(WORK, work_deck(name));
        decks.insert(EDUCATION, education_deck(profile, limits));
        decks.insert(MILITARY, military_deck(profile, rules, limits));
        decks.insert(ACADEMIC, academic_deck(profile, rules, limits, name));
        decks.insert(INDUSTRY, industry_deck(profile, rules, limits));
        decks.insert(PROJECTS, projects_deck(profile, limits));
        decks.insert(SKILLS, skills_deck(profile, limits));
        decks.insert(ACHIEVEMENTS, achievements_deck(profile, name));

        for (deck_name, deck) in graph.card_decks.iter() {
            log::debug!("built deck `{deck_name}` with {} cards", deck.len());
        }

        graph.mini_games = mini_games(name);
        graph.personal_cards = personal_cards(profile, name);

        log::debug!(
            "built graph: {} decks, {} mini-games, {} personal cards",
            graph.card_decks.len(),
            graph.mini_games.len(),
            graph.personal_cards.len()
        );
        graph
    }
}

fn hub_card(
    kind: CardKind,
    title: &str,
    text: String,
    icon: &str,
    image: &str,
    left: (&str, &str),
    right: (&str, &str),
) -> Card {
    Card::new(kind, title)
        .with_text(text)
        .with_icon(icon)
        .with_image(image)
        .with_left(left.0, Action::switch_deck(left.1))
        .with_right(right.0, Action::switch_deck(right.1))
}

fn main_deck(profile: &Profile, name: &str) -> Deck {
    Deck::new().with_card(hub_card(
        CardKind::Main,
        "Choose Your Path",
        format!(
            "You discover the chronicles of {name}, a versatile technologist with {} career chapters. \
             Which aspect of their journey interests you most?",
            profile.experience.len()
        ),
        "🧭",
        "assets/img/professional/office-equipment.png",
        ("Professional Journey", PROFESSIONAL),
        ("Personal Story", PERSONAL),
    ))
}

fn professional_deck(name: &str) -> Deck {
    Deck::new().with_card(hub_card(
        CardKind::Main,
        "Professional Focus",
        format!(
            "{name} has built a career spanning military service, academia, and industry. \
             Which era would you like to explore?"
        ),
        "💼",
        "assets/img/professional/developer.png",
        ("Work Experience", WORK),
        ("Education & Research", EDUCATION),
    ))
}

fn personal_deck(name: &str) -> Deck {
    Deck::new().with_card(hub_card(
        CardKind::Main,
        "Personal Journey",
        format!(
            "Beyond the professional achievements, discover the person behind the CV. \
             {name} has diverse interests and creative projects."
        ),
        "🧩",
        "assets/img/personal/creativity.png",
        ("Projects & Innovation", PROJECTS),
        ("Skills & Interests", SKILLS),
    ))
}

fn work_deck(name: &str) -> Deck {
    Deck::new()
        .with_card(hub_card(
            CardKind::Work,
            "Career Timeline",
            "Three distinct phases define this journey: military service, academia, and consulting. \
             Where shall we begin?"
                .to_string(),
            "⏰",
            "assets/img/professional/leadership.png",
            ("Military Era", MILITARY),
            ("Academic Journey", ACADEMIC),
        ))
        .with_card(hub_card(
            CardKind::Work,
            "Industry & Consulting",
            format!("Beyond military and academia, {name} has extensive consulting experience across multiple industries."),
            "💼",
            "assets/img/professional/office-equipment.png",
            ("Explore Consulting", INDUSTRY),
            ("Back to Timeline", WORK),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Education, Experience, PersonalInfo, Project};
    use quest_model::Navigation;

    fn sample_profile() -> Profile {
        Profile {
            personal: PersonalInfo {
                name: "Ada Example".to_string(),
                email: "ada@example.org".to_string(),
                ..Default::default()
            },
            experience: vec![
                Experience {
                    title: "Officer".to_string(),
                    organization: "RAN".to_string(),
                    ..Default::default()
                },
                Experience {
                    title: "Lecturer".to_string(),
                    organization: "Example University".to_string(),
                    ..Default::default()
                },
                Experience {
                    title: "Senior Consultant".to_string(),
                    organization: "Acme".to_string(),
                    ..Default::default()
                },
            ],
            education: vec![Education {
                degree: "PhD".to_string(),
                field: "Computer Science".to_string(),
                ..Default::default()
            }],
            projects: vec![Project {
                name: "Talk Buddy".to_string(),
                ..Default::default()
            }],
            interests: vec!["Chess".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_deck_order() {
        let graph = GraphBuilder::with_defaults().build(&sample_profile());
        let names: Vec<_> = graph.card_decks.names().collect();
        assert_eq!(
            names,
            vec![
                MAIN, PROFESSIONAL, PERSONAL, WORK, EDUCATION, MILITARY, ACADEMIC, INDUSTRY,
                PROJECTS, SKILLS, ACHIEVEMENTS
            ]
        );
        assert_eq!(graph.mini_games.len(), 3);
        assert_eq!(graph.personal_cards.len(), 1);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = GraphBuilder::with_defaults();
        let profile = sample_profile();
        assert_eq!(builder.build(&profile), builder.build(&profile));
    }

    #[test]
    fn test_every_reference_resolves() {
        let graph = GraphBuilder::with_defaults().build(&sample_profile());

        for (_, deck) in graph.card_decks.iter() {
            for card in deck.cards() {
                for (_, action) in card.actions() {
                    match action.navigation() {
                        Some(Navigation::SwitchDeck(target)) => assert!(graph.deck(target).is_some()),
                        Some(Navigation::ShowMiniGame(target)) => {
                            assert!(graph.mini_game(target).is_some())
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    #[test]
    fn test_next_card_never_on_last_card() {
        let graph = GraphBuilder::with_defaults().build(&sample_profile());

        for (_, deck) in graph.card_decks.iter() {
            let last = deck.cards().last().unwrap();
            for (_, action) in last.actions() {
                assert_ne!(action.navigation(), Some(Navigation::NextCard));
            }
        }
    }

    #[test]
    fn test_empty_profile_still_builds() {
        let graph = GraphBuilder::with_defaults().build(&Profile::default());

        assert_eq!(graph.card_decks.len(), 11);
        assert!(graph.card_decks.values().all(|deck| !deck.is_empty()));
        assert!(graph.personal_cards.is_empty());
        assert!(graph.deck(MAIN).unwrap().cards()[0].text.contains(PLACEHOLDER_NAME));
    }

    #[test]
    fn test_generated_graph_passes_validation() {
        for profile in [sample_profile(), Profile::default()] {
            let report = crate::validate(&GraphBuilder::with_defaults().build(&profile));

            assert!(report.passed(), "{:?}", report.errors().collect::<Vec<_>>());
            assert_eq!(report.stats.reachable_decks, 11);
        }
    }

    #[test]
    fn test_custom_pacing() {
        let mut config = BuilderConfig::default();
        config.pacing.education = 0;
        let graph = GraphBuilder::new(config).build(&sample_profile());

        let education = graph.deck(EDUCATION).unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education.cards()[0].kind, CardKind::Navigation);
    }
}

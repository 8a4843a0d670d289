//! Per-section deck construction.
//!
//! Each generated deck is a capped run of record cards (`nextCard()` on the right)
//! followed by one navigation card whose choices both switch decks. The last
//! record card therefore always has a card after it.

use quest_model::{Action, Card, CardKind, Deck, PersonalCard};

use super::config::{AffiliationRules, PacingLimits};
use super::effects::{add_skill, increase_stats, notify};
use super::minigames::TEACHING_CHALLENGE;
use super::{ACADEMIC, ACHIEVEMENTS, MAIN, PROJECTS, SKILLS, WORK};
use crate::profile::{Achievement, Education, Experience, Profile, Project};

const IMG_LEADERSHIP: &str = "assets/img/professional/leadership.png";
const IMG_UNIVERSITY: &str = "assets/img/education/university.png";
const IMG_DEVELOPER: &str = "assets/img/professional/developer.png";
const IMG_CERTIFICATE: &str = "assets/img/education/certificate.png";
const IMG_PROJECT: &str = "assets/img/projects/ai-project.png";
const IMG_TEAMWORK: &str = "assets/img/personal/teamwork.png";
const IMG_CREATIVITY: &str = "assets/img/personal/creativity.png";
const IMG_SKILL_FALLBACK: &str = "assets/img/icons/development-methodologies/software-design.png";

/// Skill name -> icon image.
const SKILL_IMAGES: &[(&str, &str)] = &[
    ("Python", "assets/img/icons/programming-languages/python.png"),
    ("C/C++", "assets/img/icons/programming-languages/c++.png"),
    ("C#", "assets/img/icons/programming-languages/java.png"),
    ("Java", "assets/img/icons/programming-languages/java.png"),
    ("JavaScript", "assets/img/icons/programming-languages/javascript.png"),
    ("Matlab", "assets/img/icons/software-tools/tex.png"),
    ("PHP", "assets/img/icons/programming-languages/php.png"),
    ("CSS", "assets/img/icons/web-technologies/css.png"),
    ("HTML", "assets/img/icons/web-technologies/html.png"),
];

/// Experience sub-deck an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affiliation {
    Military,
    Academic,
    Industry,
}

impl Affiliation {
    /// Classify an experience entry. First matching rule wins.
    pub fn classify(entry: &Experience, rules: &AffiliationRules) -> Option<Self> {
        let matches = |haystack: &str, needles: &[String]| {
            needles.iter().any(|n| !n.is_empty() && haystack.contains(n.as_str()))
        };

        if matches(&entry.organization, &rules.military_organizations) {
            Some(Affiliation::Military)
        } else if matches(&entry.organization, &rules.academic_organizations) {
            Some(Affiliation::Academic)
        } else if matches(&entry.title, &rules.industry_titles) {
            Some(Affiliation::Industry)
        } else {
            None
        }
    }
}

/// Cap the record cards and append the navigation card.
fn finish(mut cards: Vec<Card>, cap: usize, navigation: Card) -> Deck {
    cards.truncate(cap);
    cards.push(navigation);
    cards.into()
}

fn navigation_card(
    title: &str,
    text: impl Into<String>,
    icon: &str,
    image: &str,
    left: (&str, &str),
    right: (&str, &str),
) -> Card {
    Card::new(CardKind::Navigation, title)
        .with_text(text)
        .with_icon(icon)
        .with_image(image)
        .with_left(left.0, Action::switch_deck(left.1))
        .with_right(right.0, Action::switch_deck(right.1))
}

fn entries<'a>(
    profile: &'a Profile,
    rules: &'a AffiliationRules,
    affiliation: Affiliation,
) -> impl Iterator<Item = &'a Experience> {
    profile
        .experience
        .iter()
        .filter(move |e| Affiliation::classify(e, rules) == Some(affiliation))
}

fn first_responsibilities(entry: &Experience, count: usize) -> String {
    entry
        .responsibilities
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn military_deck(profile: &Profile, rules: &AffiliationRules, limits: &PacingLimits) -> Deck {
    let cards = entries(profile, rules, Affiliation::Military)
        .map(|exp| {
            Card::new(CardKind::Work, exp.title.as_str())
                .with_text(format!(
                    "{} ({}): {}",
                    exp.organization,
                    exp.period,
                    first_responsibilities(exp, 2)
                ))
                .with_icon("⚔️")
                .with_image(IMG_LEADERSHIP)
                .with_left(
                    "Learn Skills",
                    Action::effects([add_skill("Leadership"), increase_stats(2, 1, 1)]),
                )
                .with_right("Continue Journey", Action::NextCard)
        })
        .collect();

    finish(
        cards,
        limits.military,
        navigation_card(
            "Military Journey Complete",
            "You have explored the military service era. Where to next?",
            "🎖️",
            IMG_LEADERSHIP,
            ("Explore Academia", ACADEMIC),
            ("Back to Career Timeline", WORK),
        ),
    )
}

pub fn academic_deck(
    profile: &Profile,
    rules: &AffiliationRules,
    limits: &PacingLimits,
    name: &str,
) -> Deck {
    let cards = entries(profile, rules, Affiliation::Academic)
        .map(|exp| {
            Card::new(CardKind::Work, exp.title.as_str())
                .with_text(format!("{}: {}", exp.organization, first_responsibilities(exp, 1)))
                .with_icon("🎓")
                .with_image(IMG_UNIVERSITY)
                .with_left("View Achievements", Action::show_mini_game(TEACHING_CHALLENGE))
                .with_right("Explore More", Action::NextCard)
        })
        .collect();

    finish(
        cards,
        limits.academic,
        navigation_card(
            "Academic Path Complete",
            format!("{name} has taught, researched and mentored across many cohorts. Continue exploring?"),
            "🎓",
            IMG_UNIVERSITY,
            ("View Projects", PROJECTS),
            ("Back to Career", WORK),
        ),
    )
}

pub fn industry_deck(profile: &Profile, rules: &AffiliationRules, limits: &PacingLimits) -> Deck {
    let cards = entries(profile, rules, Affiliation::Industry)
        .map(|exp| {
            let organization = if exp.organization.is_empty() {
                "Independent"
            } else {
                exp.organization.as_str()
            };
            Card::new(CardKind::Work, exp.title.as_str())
                .with_text(format!("{organization}: {}", first_responsibilities(exp, 1)))
                .with_icon("💡")
                .with_image(IMG_DEVELOPER)
                .with_left(
                    "Gain Experience",
                    Action::effects([add_skill("Consulting"), increase_stats(1, 2, 1)]),
                )
                .with_right("Next Challenge", Action::NextCard)
        })
        .collect();

    finish(
        cards,
        limits.industry,
        navigation_card(
            "Consulting Journey Complete",
            "You have explored the consulting and industry experience. Ready for more?",
            "💡",
            IMG_DEVELOPER,
            ("View Skills", SKILLS),
            ("Back to Main", MAIN),
        ),
    )
}

fn education_card(edu: &Education) -> Card {
    Card::new(CardKind::Education, edu.degree.as_str())
        .with_text(format!("{} at {} ({})", edu.field, edu.institution, edu.year))
        .with_icon("🎓")
        .with_image(IMG_CERTIFICATE)
        .with_left(
            "Add Qualification",
            Action::effects([add_skill(&edu.field), increase_stats(1, 0, 1)]),
        )
        .with_right("Continue", Action::NextCard)
}

pub fn education_deck(profile: &Profile, limits: &PacingLimits) -> Deck {
    finish(
        profile.education.iter().map(education_card).collect(),
        limits.education,
        navigation_card(
            "Education Complete",
            "A strong academic foundation. Continue your exploration?",
            "🎓",
            IMG_CERTIFICATE,
            ("Explore Projects", PROJECTS),
            ("Back to Main", MAIN),
        ),
    )
}

fn project_card(project: &Project) -> Card {
    let text = if project.description.is_empty() {
        "An innovative project"
    } else {
        project.description.as_str()
    };
    Card::new(CardKind::Project, project.name.as_str())
        .with_text(text)
        .with_icon("🚀")
        .with_image(IMG_PROJECT)
        .with_left(
            "Study Project",
            Action::effects([add_skill("Innovation"), increase_stats(1, 1, 2)]),
        )
        .with_right("Next Project", Action::NextCard)
}

pub fn projects_deck(profile: &Profile, limits: &PacingLimits) -> Deck {
    finish(
        profile.projects.iter().map(project_card).collect(),
        limits.projects,
        navigation_card(
            "Projects Explored",
            "You have discovered tools, platforms and experiments. What next?",
            "🚀",
            IMG_PROJECT,
            ("View Skills", SKILLS),
            ("Back to Main", MAIN),
        ),
    )
}

/// Icon image for a skill, with a generic fallback.
pub fn skill_image(skill: &str) -> &'static str {
    SKILL_IMAGES
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, path)| *path)
        .unwrap_or(IMG_SKILL_FALLBACK)
}

pub fn skills_deck(profile: &Profile, limits: &PacingLimits) -> Deck {
    let cards = profile
        .skills
        .programming
        .core
        .iter()
        .take(limits.skill_source_window)
        .map(|skill| {
            Card::new(CardKind::Skill, format!("Master {skill}"))
                .with_text(format!(
                    "You discover expertise in {skill}. This is a valuable skill in modern development."
                ))
                .with_icon("💻")
                .with_image(skill_image(skill))
                .with_left(
                    "Learn Skill",
                    Action::composite([add_skill(skill), increase_stats(2, 0, 0)], Action::NextCard),
                )
                .with_right("Skip to Next", Action::NextCard)
        })
        .collect();

    finish(
        cards,
        limits.skills,
        navigation_card(
            "Skills Mastered",
            "You have discovered a diverse technical skillset. Ready to complete your journey?",
            "💻",
            skill_image("Python"),
            ("View Achievements", ACHIEVEMENTS),
            ("Back to Main", MAIN),
        ),
    )
}

fn achievement_card(achievement: &Achievement) -> Card {
    Card::new(CardKind::Achievement, achievement.title())
        .with_text(achievement.description())
        .with_icon("🏆")
        .with_image(IMG_UNIVERSITY)
        .with_left(
            "Amazing!",
            Action::effects([add_skill("Excellence"), increase_stats(0, 0, 3)]),
        )
        .with_right("Continue", Action::NextCard)
}

/// Achievement cards, closed by a "path complete" card that returns to `main`.
pub fn achievements_deck(profile: &Profile, name: &str) -> Deck {
    let contact = if profile.personal.email.is_empty() {
        "Thank you for playing!".to_string()
    } else {
        format!("Thank you for playing! Contact: {}", profile.personal.email)
    };

    let closing = Card::new(CardKind::Achievement, "Path Complete!")
        .with_text(format!(
            "You've explored one path through {name}'s journey. There are many more stories to discover! \
             Try different choices to uncover all experiences."
        ))
        .with_icon("🎉")
        .with_image(IMG_TEAMWORK)
        .with_left("Get in Touch", Action::effects([notify(&contact)]))
        .with_right("Explore More Paths", Action::switch_deck(MAIN));

    profile
        .achievements
        .iter()
        .map(achievement_card)
        .chain(std::iter::once(closing))
        .collect()
}

/// One flavour card per interest.
pub fn personal_cards(profile: &Profile, name: &str) -> Vec<PersonalCard> {
    profile
        .interests
        .iter()
        .map(|interest| PersonalCard {
            kind: CardKind::Personal,
            title: format!("Personal Interest: {interest}"),
            text: format!("Outside of work, {name} enjoys {interest}."),
            icon: "🎯".to_string(),
            image_path: IMG_CREATIVITY.to_string(),
        })
        .collect()
}

//! The fixed mini-game catalogue.
//!
//! Mini-games are declared by hand rather than derived from the profile. Their
//! buttons only carry effects.

use quest_model::{Action, Button, Catalogue, MiniGame};

use super::effects::{increase_stats, notify};

pub const DEPLOYMENT_CHALLENGE: &str = "deploymentChallenge";
pub const TEACHING_CHALLENGE: &str = "teachingChallenge";
pub const PERSONAL_VALUES: &str = "personalValues";

fn button(text: &str, stats: (u8, u8, u8), message: &str) -> Button {
    Button::new(
        text,
        Action::effects([increase_stats(stats.0, stats.1, stats.2), notify(message)]),
    )
}

/// Build the mini-game catalogue.
///
/// `name` personalises the prompt of the values game.
pub fn mini_games(name: &str) -> Catalogue<MiniGame> {
    let mut games = Catalogue::new();

    games.insert(
        DEPLOYMENT_CHALLENGE,
        MiniGame::new(
            "DEPLOYMENT CHALLENGE",
            "A critical deployment is failing in production. How do you handle it?",
        )
        .with_button(button("Rollback immediately", (1, 2, 0), "Crisis averted!"))
        .with_button(button("Debug in production", (2, 0, 1), "Risky but educational!"))
        .with_button(button("Call the team", (0, 1, 2), "Teamwork wins!")),
    );

    games.insert(
        TEACHING_CHALLENGE,
        MiniGame::new(
            "TEACHING MOMENT",
            "A student is struggling with a complex concept. Your approach?",
        )
        .with_button(button("Use real-world examples", (0, 2, 2), "Student breakthrough!"))
        .with_button(button("Provide extra resources", (1, 1, 1), "Steady progress!"))
        .with_button(button("One-on-one mentoring", (0, 1, 3), "Personal touch works!")),
    );

    games.insert(
        PERSONAL_VALUES,
        MiniGame::new("CORE VALUES", format!("What drives {name} forward?"))
            .with_button(button("Innovation & Creation", (2, 0, 1), "Creative spirit!"))
            .with_button(button("Teaching & Mentoring", (0, 1, 3), "Educator at heart!"))
            .with_button(button("Problem Solving", (3, 0, 0), "Solution finder!")),
    );

    games
}

//! Graph Validator - structural checks over a quest graph.
//!
//! The validator runs these phases in order and reports every finding rather than
//! stopping at the first:
//! 1. **References**: every action must parse, every `switchDeckFn` / `showMiniGameFn`
//!    target must exist, and `nextCard()` must not sit on the last card of its deck
//! 2. **Sizes**: empty decks are errors, single-card decks are warnings
//! 3. **Mini-games**: every mini-game needs at least one button, and button results
//!    must parse
//! 4. **Reachability**: every deck must be reachable from the entry deck through
//!    `switchDeckFn` edges (mini-game and effect edges do not count)
//!
//! The graph is never modified. Each run is a pure function of its input.

mod finding;
mod hints;
mod report;

pub use finding::*;
pub use hints::*;
pub use report::*;

use quest_model::{InvalidAction, Navigation, QuestGraph, Side, ENTRY_DECK};
use std::collections::{HashSet, VecDeque};

/// Options for a validation run.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Deck reachability is measured from.
    pub entry_deck: String,

    /// Attach remediation hints to dangling-reference and unreachable findings.
    pub hints: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            entry_deck: ENTRY_DECK.to_string(),
            hints: true,
        }
    }
}

/// Validates quest graphs.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    /// Create a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Create a validator with default options.
    pub fn with_defaults() -> Self {
        Self::new(ValidatorOptions::default())
    }

    /// Run every check and collect the findings in scan order.
    pub fn validate(&self, graph: &QuestGraph) -> ValidationReport {
        let mut findings = Vec::new();

        self.check_references(graph, &mut findings);
        let after_references = findings.len();
        log::debug!("reference scan: {after_references} findings");

        self.check_sizes(graph, &mut findings);
        let after_sizes = findings.len();
        log::debug!("size check: {} findings", after_sizes - after_references);

        self.check_mini_games(graph, &mut findings);
        let after_games = findings.len();
        log::debug!("mini-game check: {} findings", after_games - after_sizes);

        let reachable = reachable_decks(graph, &self.options.entry_deck);
        self.check_reachability(graph, &reachable, &mut findings);
        log::debug!(
            "reachability: {} of {} decks reachable",
            reachable.len(),
            graph.card_decks.len()
        );

        ValidationReport {
            findings,
            stats: GraphStats {
                decks: graph.card_decks.len(),
                cards: graph.card_count(),
                mini_games: graph.mini_games.len(),
                personal_cards: graph.personal_cards.len(),
                reachable_decks: reachable.len(),
                entry_deck: self.options.entry_deck.clone(),
            },
        }
    }

    /// Malformed actions, dangling targets and `nextCard()` at the end of a deck.
    fn check_references(&self, graph: &QuestGraph, findings: &mut Vec<Finding>) {
        for (deck_name, deck) in graph.card_decks.iter() {
            for (index, card) in deck.cards().iter().enumerate() {
                for side in Side::BOTH {
                    let choice = card.choice(side);
                    if let Some(invalid) = &choice.invalid {
                        let finding = self.malformed(invalid, |text, reason| FindingKind::MalformedAction {
                            text,
                            reason,
                        });
                        findings.push(finding.at(deck_name, index, side));
                        continue;
                    }
                    let Some(action) = &choice.action else {
                        continue;
                    };
                    let finding = match action.navigation() {
                        Some(Navigation::SwitchDeck(target)) if !graph.card_decks.contains(target) => {
                            let finding = Finding::new(FindingKind::MissingDeck {
                                target: target.to_string(),
                            });
                            self.hinted(finding, || {
                                let known: Vec<_> = graph.card_decks.names().collect();
                                missing_target_hint("deck", target, &known)
                            })
                        }
                        Some(Navigation::ShowMiniGame(target)) if !graph.mini_games.contains(target) => {
                            let finding = Finding::new(FindingKind::MissingMiniGame {
                                target: target.to_string(),
                            });
                            self.hinted(finding, || {
                                let known: Vec<_> = graph.mini_games.names().collect();
                                missing_target_hint("mini-game", target, &known)
                            })
                        }
                        Some(Navigation::NextCard) if deck.is_last(index) => {
                            Finding::new(FindingKind::AdvanceAtEnd)
                        }
                        _ => continue,
                    };
                    findings.push(finding.at(deck_name, index, side));
                }
            }
        }
    }

    fn check_sizes(&self, graph: &QuestGraph, findings: &mut Vec<Finding>) {
        for (deck_name, deck) in graph.card_decks.iter() {
            let kind = match deck.len() {
                0 => FindingKind::EmptyDeck {
                    deck: deck_name.to_string(),
                },
                1 => FindingKind::ThinDeck {
                    deck: deck_name.to_string(),
                },
                _ => continue,
            };
            findings.push(Finding::new(kind));
        }
    }

    fn check_mini_games(&self, graph: &QuestGraph, findings: &mut Vec<Finding>) {
        for (game_name, game) in graph.mini_games.iter() {
            if game.buttons.is_empty() {
                findings.push(Finding::new(FindingKind::ButtonlessMiniGame {
                    game: game_name.to_string(),
                }));
            }
            for (index, button) in game.buttons.iter().enumerate() {
                if let Some(invalid) = &button.invalid {
                    findings.push(self.malformed(invalid, |text, reason| FindingKind::MalformedButton {
                        game: game_name.to_string(),
                        button: index,
                        text,
                        reason,
                    }));
                }
            }
        }
    }

    fn check_reachability(
        &self,
        graph: &QuestGraph,
        reachable: &HashSet<&str>,
        findings: &mut Vec<Finding>,
    ) {
        let entry = self.options.entry_deck.as_str();
        let entry_exists = graph.card_decks.contains(entry);

        for deck_name in graph.card_decks.names() {
            if reachable.contains(deck_name) {
                continue;
            }
            let finding = Finding::new(FindingKind::UnreachableDeck {
                deck: deck_name.to_string(),
            });
            findings.push(self.hinted(finding, || unreachable_hint(deck_name, entry, entry_exists)));
        }
    }

    fn malformed(
        &self,
        invalid: &InvalidAction,
        kind: impl FnOnce(String, String) -> FindingKind,
    ) -> Finding {
        let finding = Finding::new(kind(invalid.text.clone(), invalid.error.to_string()));
        self.hinted(finding, || malformed_action_hint(&invalid.error))
    }

    fn hinted(&self, finding: Finding, hint: impl FnOnce() -> String) -> Finding {
        if self.options.hints {
            finding.with_hint(hint())
        } else {
            finding
        }
    }
}

/// Validate a graph with default options.
pub fn validate(graph: &QuestGraph) -> ValidationReport {
    Validator::with_defaults().validate(graph)
}

/// Decks reachable from `entry` by following `switchDeckFn` edges.
///
/// Empty when the entry deck does not exist. Targets missing from the catalogue are
/// not visited.
pub fn reachable_decks<'a>(graph: &'a QuestGraph, entry: &str) -> HashSet<&'a str> {
    let mut visited = HashSet::new();
    let Some((entry, _)) = graph.card_decks.iter().find(|(name, _)| *name == entry) else {
        return visited;
    };

    let mut queue = VecDeque::from([entry]);
    visited.insert(entry);

    while let Some(current) = queue.pop_front() {
        let Some(deck) = graph.deck(current) else {
            continue;
        };
        for target in deck.switch_targets() {
            if graph.card_decks.contains(target) && visited.insert(target) {
                queue.push_back(target);
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_model::{Action, Button, Card, CardKind, Deck, EffectCall, MiniGame, Side};

    fn card(left: Action, right: Action) -> Card {
        Card::new(CardKind::Main, "Card").with_left("L", left).with_right("R", right)
    }

    fn effect() -> Action {
        Action::effects([EffectCall::new("increaseStatsFn", "1, 0, 0")])
    }

    fn deck(cards: Vec<Card>) -> Deck {
        cards.into()
    }

    fn game() -> MiniGame {
        MiniGame::new("QUIZ", "?").with_button(Button::new("A", effect()))
    }

    /// Every target resolves, every deck has two cards and is reachable.
    fn consistent_graph() -> QuestGraph {
        QuestGraph::new()
            .with_deck(
                "main",
                deck(vec![
                    card(effect(), Action::NextCard),
                    card(Action::switch_deck("work"), Action::show_mini_game("quiz")),
                ]),
            )
            .with_deck(
                "work",
                deck(vec![
                    card(effect(), Action::NextCard),
                    card(Action::switch_deck("main"), effect()),
                ]),
            )
            .with_mini_game("quiz", game())
    }

    #[test]
    fn test_consistent_graph_passes() {
        let report = validate(&consistent_graph());

        assert!(report.findings.is_empty());
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.stats.decks, 2);
        assert_eq!(report.stats.cards, 4);
        assert_eq!(report.stats.reachable_decks, 2);
    }

    #[test]
    fn test_missing_deck() {
        let graph = QuestGraph::new().with_deck(
            "main",
            deck(vec![
                card(Action::switch_deck("missing"), effect()),
                card(effect(), effect()),
            ]),
        );
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.message(), "missing deck: missing");
        assert_eq!(
            finding.location,
            Some(CardLocation {
                deck: "main".to_string(),
                card: 0,
                side: Side::Left,
            })
        );
        assert!(finding.hint.is_some());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_missing_mini_game_inside_composite() {
        let graph = QuestGraph::new().with_deck(
            "main",
            deck(vec![
                card(
                    effect(),
                    Action::composite([EffectCall::new("addSkillFn", "\"Go\"")], Action::show_mini_game("nope")),
                ),
                card(effect(), effect()),
            ]),
        );
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].message(), "missing mini-game: nope");
        assert_eq!(report.findings[0].location.as_ref().unwrap().side, Side::Right);
    }

    #[test]
    fn test_orphan_deck_is_unreachable() {
        let graph = consistent_graph().with_deck("orphan", deck(vec![card(effect(), effect())]));
        let report = validate(&graph);

        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "unreachable deck: orphan");
        assert!(errors[0].location.is_none());
        assert!(errors[0].hint.as_ref().unwrap().contains("switchDeckFn(\"orphan\")"));

        // The single-card orphan is also thin, which is only advisory.
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].message(), "thin deck: orphan");
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_adding_an_edge_makes_orphan_reachable() {
        let orphan = deck(vec![card(effect(), Action::NextCard), card(effect(), effect())]);
        let graph = consistent_graph().with_deck("orphan", orphan.clone());
        assert!(!validate(&graph).passed());

        let mut linked = consistent_graph();
        linked.card_decks.insert(
            "work",
            deck(vec![
                card(effect(), Action::switch_deck("orphan")),
                card(Action::switch_deck("main"), effect()),
            ]),
        );
        let linked = linked.with_deck("orphan", orphan);

        let report = validate(&linked);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn test_next_card_on_last_card() {
        let graph = QuestGraph::new().with_deck(
            "main",
            deck(vec![
                card(effect(), Action::NextCard),
                card(Action::NextCard, effect()),
            ]),
        );
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.kind, FindingKind::AdvanceAtEnd);
        let location = finding.location.as_ref().unwrap();
        assert_eq!((location.deck.as_str(), location.card, location.side), ("main", 1, Side::Left));
        assert!(finding.hint.is_none());
    }

    #[test]
    fn test_next_card_inside_composite_on_last_card() {
        let graph = QuestGraph::new().with_deck(
            "main",
            deck(vec![
                card(effect(), effect()),
                card(effect(), Action::composite([EffectCall::new("addSkillFn", "\"Go\"")], Action::NextCard)),
            ]),
        );
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].kind, FindingKind::AdvanceAtEnd);
    }

    #[test]
    fn test_size_boundaries() {
        let graph = QuestGraph::new()
            .with_deck("main", deck(vec![card(Action::switch_deck("empty"), Action::switch_deck("thin"))]))
            .with_deck("empty", Deck::new())
            .with_deck("thin", deck(vec![card(Action::switch_deck("main"), effect())]));
        let report = validate(&graph);

        let messages: Vec<_> = report.findings.iter().map(Finding::message).collect();
        assert_eq!(
            messages,
            vec!["thin deck: main", "empty deck: empty", "thin deck: thin"]
        );
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_single_card_deck_alone_passes() {
        let graph = QuestGraph::new().with_deck("main", deck(vec![card(effect(), effect())]));
        let report = validate(&graph);

        assert_eq!(report.warning_count(), 1);
        assert!(report.passed());
    }

    #[test]
    fn test_buttonless_mini_game() {
        let graph = consistent_graph().with_mini_game("blank", MiniGame::new("BLANK", ""));
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].message(), "mini-game without buttons: blank");
    }

    #[test]
    fn test_mini_game_edges_do_not_reach_decks() {
        // `side` is shown as a mini-game from `main` but never switched to as a deck.
        let graph = QuestGraph::new()
            .with_deck(
                "main",
                deck(vec![card(Action::show_mini_game("side"), Action::NextCard), card(effect(), effect())]),
            )
            .with_deck("side", deck(vec![card(effect(), Action::NextCard), card(effect(), effect())]))
            .with_mini_game("side", game());
        let report = validate(&graph);

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].message(), "unreachable deck: side");
    }

    #[test]
    fn test_missing_entry_deck_makes_everything_unreachable() {
        let graph = QuestGraph::new()
            .with_deck("a", deck(vec![card(Action::switch_deck("b"), effect()), card(effect(), effect())]))
            .with_deck("b", deck(vec![card(Action::switch_deck("a"), effect()), card(effect(), effect())]));
        let report = validate(&graph);

        let messages: Vec<_> = report.findings.iter().map(Finding::message).collect();
        assert_eq!(messages, vec!["unreachable deck: a", "unreachable deck: b"]);
        assert!(report.findings[0].hint.as_ref().unwrap().starts_with("no entry deck"));
        assert_eq!(report.stats.reachable_decks, 0);
    }

    #[test]
    fn test_finding_order_follows_phases() {
        let graph = QuestGraph::new()
            .with_deck("main", deck(vec![card(Action::switch_deck("ghost"), Action::NextCard)]))
            .with_deck("orphan", Deck::new())
            .with_mini_game("blank", MiniGame::new("BLANK", ""));
        let report = validate(&graph);

        let messages: Vec<_> = report.findings.iter().map(Finding::message).collect();
        assert_eq!(
            messages,
            vec![
                "missing deck: ghost",
                "advance-at-end",
                "thin deck: main",
                "empty deck: orphan",
                "mini-game without buttons: blank",
                "unreachable deck: orphan",
            ]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let graph = QuestGraph::new()
            .with_deck("main", deck(vec![card(Action::switch_deck("x"), Action::show_mini_game("y"))]))
            .with_deck("a", Deck::new())
            .with_deck("b", Deck::new());
        let validator = Validator::with_defaults();

        assert_eq!(validator.validate(&graph), validator.validate(&graph));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let graph = QuestGraph::new()
            .with_deck("main", deck(vec![card(Action::switch_deck("x"), effect()), card(effect(), effect())]));
        let validator = Validator::new(ValidatorOptions {
            hints: false,
            ..Default::default()
        });

        let report = validator.validate(&graph);
        assert!(report.findings.iter().all(|f| f.hint.is_none()));
    }

    #[test]
    fn test_custom_entry_deck() {
        let graph = QuestGraph::new()
            .with_deck("start", deck(vec![card(Action::switch_deck("next"), effect()), card(effect(), effect())]))
            .with_deck("next", deck(vec![card(effect(), Action::NextCard), card(effect(), effect())]));
        let validator = Validator::new(ValidatorOptions {
            entry_deck: "start".to_string(),
            ..Default::default()
        });

        assert!(validator.validate(&graph).findings.is_empty());
    }

    #[test]
    fn test_malformed_action_is_reported_with_other_defects() {
        let json = r#"{
            "cardDecks": {
                "main": [
                    {"title": "A", "leftResult": "switchDeckFn(work)", "rightResult": "switchDeckFn(\"ghost\")"},
                    {"title": "B", "leftResult": "showNotificationFn(It's done); switchDeckFn(\"main\")",
                     "rightResult": "celebrate; nextCard()"}
                ],
                "work": [
                    {"title": "C", "rightResult": "nextCard()"},
                    {"title": "D", "leftResult": "switchDeckFn(\"main\")"}
                ]
            },
            "miniGames": {
                "quiz": {"title": "QUIZ", "buttons": [{"text": "A", "result": "nextCard(1)"}]}
            }
        }"#;
        let graph = QuestGraph::from_json_str(json).unwrap();
        let report = validate(&graph);

        let messages: Vec<_> = report.findings.iter().map(Finding::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "deck 'main' card 0 left: malformed action: `switchDeckFn(work)` \
                 (`switchDeckFn` expects exactly one non-empty quoted name, got `work`)",
                "deck 'main' card 0 right: missing deck: ghost",
                "deck 'main' card 1 right: advance-at-end",
                "malformed result on mini-game quiz button 0: `nextCard(1)` \
                 (`nextCard()` takes no arguments, got `1`)",
                "unreachable deck: work",
            ]
        );
        assert!(report.findings[0].hint.as_ref().unwrap().starts_with("quote the target name"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_custom_entry_deck_is_recorded() {
        let validator = Validator::new(ValidatorOptions {
            entry_deck: "start".to_string(),
            ..Default::default()
        });
        let report = validator.validate(&consistent_graph());

        assert_eq!(report.stats.entry_deck, "start");
        assert_eq!(report.stats.reachable_decks, 0);
        assert_eq!(validate(&consistent_graph()).stats.entry_deck, "main");
    }

    #[test]
    fn test_reachable_decks_follows_switch_edges_only() {
        let graph = consistent_graph().with_deck("island", Deck::new());
        let reachable = reachable_decks(&graph, "main");

        assert!(reachable.contains("main"));
        assert!(reachable.contains("work"));
        assert!(!reachable.contains("island"));
        assert!(reachable_decks(&graph, "nowhere").is_empty());
    }
}

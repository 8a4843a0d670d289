//! Validation report - the ordered findings of one run plus graph statistics.

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};

/// Size summary of the validated graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub decks: usize,
    pub cards: usize,
    pub mini_games: usize,
    pub personal_cards: usize,
    /// Decks reachable from the entry deck, the entry deck included.
    pub reachable_decks: usize,
    /// Deck reachability was measured from.
    pub entry_deck: String,
}

/// Outcome of validating a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// In scan order: references per deck, sizes, mini-games, reachability.
    pub findings: Vec<Finding>,
    pub stats: GraphStats,
}

impl ValidationReport {
    /// The run passes when no error-level finding exists.
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(Finding::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Process exit code: 0 on pass, 1 when any error-level finding exists.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

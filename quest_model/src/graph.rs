//! The quest graph document - decks, mini-games and personal cards together.

use serde::{Deserialize, Serialize};

use crate::card::PersonalCard;
use crate::catalogue::Catalogue;
use crate::deck::Deck;
use crate::error::ModelError;
use crate::minigame::MiniGame;

/// Name of the deck play starts from.
pub const ENTRY_DECK: &str = "main";

/// The complete card-game graph.
///
/// Field names follow the persisted JSON document (`cardDecks`, `miniGames`,
/// `personalCards`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestGraph {
    /// Deck name -> deck, in document order.
    pub card_decks: Catalogue<Deck>,

    /// Mini-game name -> mini-game, in document order.
    pub mini_games: Catalogue<MiniGame>,

    /// Standalone flavour cards.
    #[serde(default)]
    pub personal_cards: Vec<PersonalCard>,
}

impl QuestGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted graph document.
    ///
    /// Every action string is parsed here; a malformed action fails the load.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the graph as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace a deck.
    pub fn with_deck(mut self, name: impl Into<String>, deck: Deck) -> Self {
        self.card_decks.insert(name, deck);
        self
    }

    /// Add or replace a mini-game.
    pub fn with_mini_game(mut self, name: impl Into<String>, game: MiniGame) -> Self {
        self.mini_games.insert(name, game);
        self
    }

    /// Get a deck by name.
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.card_decks.get(name)
    }

    /// Get a mini-game by name.
    pub fn mini_game(&self, name: &str) -> Option<&MiniGame> {
        self.mini_games.get(name)
    }

    /// Total number of cards across all decks.
    pub fn card_count(&self) -> usize {
        self.card_decks.values().map(Deck::len).sum()
    }
}

//! Deck definitions - named, ordered sequences of cards.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// An ordered sequence of cards.
///
/// The deck's name is its key in the graph's catalogue. Play always enters a deck
/// at its first card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of the deck.
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Append a card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether `index` is the final card of the deck.
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.cards.len()
    }

    /// Names of every deck this deck can switch to, in card order.
    pub fn switch_targets(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .flat_map(|card| card.actions())
            .filter_map(|(_, action)| action.target_deck())
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

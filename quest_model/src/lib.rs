//! # Quest Model
//!
//! The data model of the CV Quest card game: a graph of named decks, each an ordered
//! sequence of two-choice cards, plus a table of mini-games and a list of standalone
//! personal cards.
//!
//! ## Core Components
//!
//! - **action**: Structured choice outcomes and the parser for their string encoding
//! - **card** / **deck** / **minigame**: Graph content
//! - **catalogue**: Insertion-ordered, name-keyed storage for decks and mini-games
//! - **graph**: The complete document and its JSON persistence

pub mod action;
pub mod card;
pub mod catalogue;
pub mod deck;
pub mod error;
pub mod graph;
pub mod minigame;

pub use action::*;
pub use card::*;
pub use catalogue::*;
pub use deck::*;
pub use error::*;
pub use graph::*;
pub use minigame::*;

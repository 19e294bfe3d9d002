use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    /// Unique, non-empty
    pub username: String,
}

/// Card model - one question/answer pair belonging to a deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
    pub deck_id: String,
}

/// A `decks` row without its cards
#[derive(Debug, Clone, FromRow)]
pub struct DeckRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
}

/// Deck model - a deck hydrated with all of its cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    /// Absent when the deck was created without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user_id: String,
    /// Cards in insertion order
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn from_row(row: DeckRow, cards: Vec<Card>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            user_id: row.user_id,
            cards,
        }
    }
}

/// Front and back of a card created together with its deck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardSides {
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

/// Input for [`crate::Store::create_deck`]
#[derive(Debug, Clone)]
pub struct NewDeck {
    pub name: String,
    pub description: Option<String>,
    pub user_id: String,
    pub cards: Vec<CardSides>,
}

/// Input for [`crate::Store::create_card`]
#[derive(Debug, Clone)]
pub struct NewCard {
    pub deck_id: String,
    pub front: String,
    pub back: String,
}

/// Partial update of a deck.
///
/// `None` means the field was not supplied and is left untouched. `Some("")`
/// overwrites the column with an empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DeckPatch {
    /// True when no recognized field was supplied.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Partial update of a card, same semantics as [`DeckPatch`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPatch {
    pub front: Option<String>,
    pub back: Option<String>,
}

impl CardPatch {
    /// True when no recognized field was supplied.
    pub const fn is_empty(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }
}

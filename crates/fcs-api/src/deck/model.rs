use fcs_db::models::{CardSides, NewDeck};
use serde::Deserialize;

/// Body of `POST /decks`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: String,
    /// Cards created in the same transaction as the deck
    #[serde(default)]
    pub cards: Vec<CardSides>,
}

impl From<CreateDeckRequest> for NewDeck {
    fn from(req: CreateDeckRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            user_id: req.user_id,
            cards: req.cards,
        }
    }
}

/// Query string of `GET /decks`
#[derive(Debug, Default, Deserialize)]
pub struct DeckQuery {
    /// Substring the deck name must contain
    pub name: Option<String>,
}

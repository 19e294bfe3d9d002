use fcs_db::models::NewCard;
use serde::Deserialize;

/// Body of `POST /cards`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    #[serde(default)]
    pub deck_id: String,
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
}

impl From<CreateCardRequest> for NewCard {
    fn from(req: CreateCardRequest) -> Self {
        Self {
            deck_id: req.deck_id,
            front: req.front,
            back: req.back,
        }
    }
}

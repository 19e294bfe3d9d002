use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use fcs_db::models::{Card, CardPatch};

use crate::{ApiState, error::ApiError, validation};

use super::model::CreateCardRequest;

/// Create the flashcard routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/cards", post(create_card)).route(
        "/cards/{card_id}",
        get(get_card).patch(patch_card).delete(delete_card),
    )
}

/// Add a card to an existing deck
async fn create_card(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateCardRequest>, ApiError>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    validation::require_fields(
        &[payload.deck_id.as_str(), payload.front.as_str(), payload.back.as_str()],
        "deckId, front and back required",
    )?;

    let card = state.store.create_card(&payload.into()).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

async fn get_card(
    State(state): State<ApiState>,
    Path(card_id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let card = state.store.get_card(&card_id).await?;
    Ok(Json(card))
}

async fn patch_card(
    State(state): State<ApiState>,
    Path(card_id): Path<String>,
    WithRejection(Json(patch), _): WithRejection<Json<CardPatch>, ApiError>,
) -> Result<Json<Card>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::Validation("no fields to update".to_string()));
    }

    let card = state.store.patch_card(&card_id, &patch).await?;
    Ok(Json(card))
}

async fn delete_card(
    State(state): State<ApiState>,
    Path(card_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_card(&card_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

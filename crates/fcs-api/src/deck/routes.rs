use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;
use fcs_db::models::{Deck, DeckPatch};

use crate::{ApiState, error::ApiError, validation};

use super::model::{CreateDeckRequest, DeckQuery};

/// Create the deck routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/decks", get(list_decks).post(create_deck))
        .route(
            "/decks/{deck_id}",
            get(get_deck).patch(patch_deck).delete(delete_deck),
        )
}

/// Create a deck, optionally with an initial batch of cards
async fn create_deck(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateDeckRequest>, ApiError>,
) -> Result<(StatusCode, Json<Deck>), ApiError> {
    validation::require_fields(
        &[payload.name.as_str(), payload.user_id.as_str()],
        "name and userId required",
    )?;
    // Every card is checked before anything is written
    for card in &payload.cards {
        validation::require_fields(
            &[card.front.as_str(), card.back.as_str()],
            "card front/back required",
        )?;
    }

    let deck = state.store.create_deck(&payload.into()).await?;
    tracing::info!(deck_id = %deck.id, cards = deck.cards.len(), "deck created");

    Ok((StatusCode::CREATED, Json(deck)))
}

async fn list_decks(
    State(state): State<ApiState>,
    WithRejection(Query(query), _): WithRejection<Query<DeckQuery>, ApiError>,
) -> Result<Json<Vec<Deck>>, ApiError> {
    let decks = state.store.list_decks(query.name.as_deref()).await?;
    Ok(Json(decks))
}

async fn get_deck(
    State(state): State<ApiState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Deck>, ApiError> {
    let deck = state.store.get_deck(&deck_id).await?;
    Ok(Json(deck))
}

/// Update the name and/or description of a deck
async fn patch_deck(
    State(state): State<ApiState>,
    Path(deck_id): Path<String>,
    WithRejection(Json(patch), _): WithRejection<Json<DeckPatch>, ApiError>,
) -> Result<Json<Deck>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::Validation("no fields to update".to_string()));
    }

    let deck = state.store.patch_deck(&deck_id, &patch).await?;
    Ok(Json(deck))
}

/// Delete a deck and all of its cards
async fn delete_deck(
    State(state): State<ApiState>,
    Path(deck_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_deck(&deck_id).await?;
    tracing::info!(deck_id = %deck_id, "deck deleted");
    Ok(StatusCode::NO_CONTENT)
}

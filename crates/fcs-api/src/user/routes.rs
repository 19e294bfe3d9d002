use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::WithRejection;
use fcs_db::models::User;

use crate::{ApiState, error::ApiError, validation};

use super::model::{CreateUserRequest, UserQuery};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", get(get_user).delete(delete_user))
}

async fn create_user(
    State(state): State<ApiState>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUserRequest>, ApiError>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    validation::require_fields(&[payload.username.as_str()], "username required")?;

    let user = state.store.create_user(&payload.username).await?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(
    State(state): State<ApiState>,
    WithRejection(Query(query), _): WithRejection<Query<UserQuery>, ApiError>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users(query.username.as_deref()).await?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get_user(&user_id).await?;
    Ok(Json(user))
}

/// Delete a user with all of its decks and cards
async fn delete_user(
    State(state): State<ApiState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_user(&user_id).await?;
    tracing::info!(user_id = %user_id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

use serde::Deserialize;

/// Body of `POST /users`
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

/// Query string of `GET /users`
#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    /// Substring the username must contain
    pub username: Option<String>,
}

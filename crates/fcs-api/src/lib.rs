pub mod config;
pub mod deck;
pub mod error;
pub mod flashcard;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tracing;
pub mod user;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;

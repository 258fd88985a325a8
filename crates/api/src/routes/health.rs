use axum::extract::State;
use axum::{routing::get, Json, Router};
use birthday_db::repositories::BirthdayRepo;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the birthday table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored record count; `null` while the store is unreachable.
    pub birthdays: Option<i64>,
}

/// GET /health
///
/// Probes the store with a real query against the `birthday` table, so a
/// missing schema shows up as `degraded` just like a dead connection.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let birthdays = match BirthdayRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Birthday store unreachable");
            None
        }
    };
    let db_healthy = birthdays.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        birthdays,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

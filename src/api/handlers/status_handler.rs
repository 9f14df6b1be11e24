//! Status handlers.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Database connectivity report
#[derive(Debug, Serialize, ToSchema)]
pub struct DatabaseStatus {
    /// Whether a trivial round-trip against the store succeeded
    pub database: bool,
}

/// Legacy liveness report
#[derive(Debug, Serialize, ToSchema)]
pub struct AppStatus {
    #[schema(example = "ok")]
    pub status: String,
}

/// Database status endpoint.
///
/// Never fails: any store error is reported as `database: false`.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Database connectivity", body = DatabaseStatus)
    )
)]
pub async fn database_status(State(state): State<AppState>) -> Json<DatabaseStatus> {
    let database = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            false
        }
    };

    Json(DatabaseStatus { database })
}

/// Legacy liveness endpoint.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    responses(
        (status = 200, description = "Service is up", body = AppStatus)
    )
)]
pub async fn service_status() -> Json<AppStatus> {
    Json(AppStatus {
        status: "ok".to_string(),
    })
}

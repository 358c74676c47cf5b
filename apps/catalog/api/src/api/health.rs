//! Application-specific readiness checks with a real database round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint that verifies the MongoDB connection.
///
/// Uses the generic `run_health_checks` utility from axum-helpers to
/// report per-dependency status.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let status = database::mongodb::check_health(&state.mongo).await;
            if status.healthy {
                tracing::debug!(latency_ms = status.response_time_ms, "MongoDB ping ok");
                Ok(())
            } else {
                Err(format!(
                    "MongoDB ping failed: {}",
                    status.message.unwrap_or_else(|| "unknown".to_string())
                ))
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

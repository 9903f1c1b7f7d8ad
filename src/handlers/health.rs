use crate::types::HealthStatus;
use axum::Json;

/// Liveness endpoint at the application root
///
/// Returns 200 OK as long as the process is dispatching requests
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

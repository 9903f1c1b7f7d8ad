use crate::state::AppState;
use crate::types::PingResponse;
use axum::{routing::get, Json, Router};

/// Routes owned by the upload group, nested under `/upload`
pub fn routes() -> Router<AppState> {
    Router::new().route("/ping", get(ping_handler))
}

pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        module: "upload",
    })
}

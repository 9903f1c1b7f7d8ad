use crate::state::AppState;
use axum::Router;

/// Routes owned by the auth group, nested under `/auth`
///
/// The group is registered by name only; no operations exist yet, so every
/// path below the prefix resolves to not-found.
pub fn routes() -> Router<AppState> {
    Router::new()
}

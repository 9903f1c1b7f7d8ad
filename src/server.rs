use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the HTTP application with all route groups and middleware
///
/// This is the only place prefixes are assigned, so each group keeps a
/// unique prefix in the dispatch table.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_handler))
        .nest("/auth", handlers::auth::routes())
        .nest("/upload", handlers::upload::routes())
        .nest("/analytics", handlers::analytics::routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Any path outside the dispatch table answers with a JSON not-found body
async fn fallback_handler() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::StatusCode;
    use http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            port: 0,
            log_level: "info".to_string(),
        };
        build_router(AppState::new(config))
    }

    #[tokio::test]
    async fn test_healthcheck_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_ping_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/upload/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analytics_ping_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/analytics/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_auth_ping_not_registered() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/auth/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_not_found() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

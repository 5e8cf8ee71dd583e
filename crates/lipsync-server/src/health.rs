use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe; the gateway holds no state that could make it unready
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::system;

/// Конфигурация всех роутов приложения
///
/// Сервер только раздаёт собранный фронтенд: все метрики живут в wasm-бандле.
pub fn configure_routes(static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let index = static_dir.join("index.html");
    let assets = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(assets)
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let app = configure_routes(Path::new("does-not-exist"));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_missing_bundle_is_not_found() {
        let app = configure_routes(Path::new("does-not-exist"));
        let response = app
            .oneshot(Request::builder().uri("/app.wasm").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

use axum::body::{Body, HttpBody};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use contracts::shared::format::format_grouped;

/// Размер ответа без чтения тела: `content-length`, иначе точная подсказка тела.
///
/// Для потоковых ответов размер неизвестен.
pub fn response_size(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// Middleware для логирования HTTP запросов
///
/// Пишет в консоль строку с временем, длительностью, размером ответа,
/// статусом, методом и путём, и дублирует её в tracing.
/// Тело ответа (в том числе wasm-бандл) проходит насквозь, не буферизуется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let size = response_size(&response);
    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status();

    // Голубой для 2xx, коричневый для остальных
    let color_code = if status.is_success() { "36" } else { "33" };
    let size_text = size
        .map(|s| format_grouped(s as i64))
        .unwrap_or_else(|| "-".to_string());

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed_ms,
        size_text,
        status.as_u16(),
        method,
        uri.path()
    );
    tracing::debug!(
        method = %method,
        path = uri.path(),
        status = status.as_u16(),
        size = ?size,
        elapsed_ms = elapsed_ms as u64,
        "request served"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn test_size_prefers_content_length_header() {
        let mut response = Response::new(Body::from("hello"));
        response
            .headers_mut()
            .insert(header::CONTENT_LENGTH, HeaderValue::from_static("2048"));
        assert_eq!(response_size(&response), Some(2048));
    }

    #[test]
    fn test_size_falls_back_to_exact_body_hint() {
        let response = Response::new(Body::from("hello"));
        assert_eq!(response_size(&response), Some(5));
    }

    #[tokio::test]
    async fn test_logger_passes_body_through() {
        let app = Router::new()
            .route("/asset", get(|| async { "bundle-bytes" }))
            .layer(middleware::from_fn(request_logger));

        let response = app
            .oneshot(Request::builder().uri("/asset").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.status().is_success());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"bundle-bytes");
    }
}

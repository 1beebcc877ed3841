use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::format::format_number;

/// Журнал запросов: время, длительность, размер ответа, статус, метод, путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Json-ответы идут без Content-Length, размер узнаём по телу
    let (body, size) = measure_body(body).await;
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    let status = parts.status.as_u16();
    let timestamp = chrono::Local::now().format("%H:%M:%S");
    let elapsed_ms = start.elapsed().as_millis();

    if parts.status.is_success() {
        tracing::info!(
            "{} | {:>5}ms | {:>12} | {} {:>6} {}",
            timestamp, elapsed_ms, size, status, method, path
        );
    } else {
        tracing::warn!(
            "{} | {:>5}ms | {:>12} | {} {:>6} {}",
            timestamp, elapsed_ms, size, status, method, path
        );
    }

    Response::from_parts(parts, body)
}

/// Читает тело целиком и возвращает его обратно вместе с размером.
/// При ошибке чтения тело пустое, размер неизвестен.
async fn measure_body(body: Body) -> (Body, Option<usize>) {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            let size = bytes.len();
            (Body::from(bytes), Some(size))
        }
        Err(_) => (Body::default(), None),
    }
}

//! Middleware for logging requests and responses.

use axum::{body::Bytes, extract::Request, middleware::Next, response::Response};

/// The number of body characters to log at the `info` level before truncating.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_bytes) = extract_parts_and_body_from_request(request).await;
    log_request(&parts, &String::from_utf8_lossy(&body_bytes));

    let request = Request::from_parts(parts, body_bytes.into());
    let response = next.run(request).await;

    let (parts, body_bytes) = extract_parts_and_body_from_response(response).await;
    log_response(&parts, &String::from_utf8_lossy(&body_bytes));

    Response::from_parts(parts, body_bytes.into())
}

// The raw bytes are kept for rebuilding the request and response, file
// uploads are not necessarily valid UTF-8.
async fn extract_parts_and_body_from_request(
    request: Request,
) -> (axum::http::request::Parts, Bytes) {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, body_bytes)
}

async fn extract_parts_and_body_from_response(
    response: Response,
) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, body_bytes)
}

fn log_request(parts: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        // Truncate on a character boundary, bodies are not always ASCII.
        let preview: String = body.chars().take(LOG_BODY_LENGTH_LIMIT).collect();
        tracing::info!("Received request: {parts:#?}\nbody: {preview}...");
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {parts:#?}\nbody: {body:?}");
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let preview: String = body.chars().take(LOG_BODY_LENGTH_LIMIT).collect();
        tracing::info!("Sending response: {parts:#?}\nbody: {preview}...");
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {parts:#?}\nbody: {body:?}");
    }
}

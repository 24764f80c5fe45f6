//! Request middleware
//!
//! Tags every request with an id and logs its start and completion, and gives
//! timed-out requests the standard error body.

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::ApiError;

/// Response header carrying the request id.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request tracing middleware.
///
/// Adds request ID and logging context for observability. The id is echoed
/// back in the `x-request-id` response header.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    // Generate request ID
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let mut response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

/// Replace the empty 408 produced by the timeout layer with a `detail` body.
///
/// Handlers never answer 408 themselves, so only bodiless timeouts are
/// rewritten.
pub async fn timeout_detail(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        return ApiError::timeout("The request timed out.").into_response();
    }

    response
}

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;

use axum::{
    body::{Bytes, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::AppError,
    response::{JsonApiResponse, log_app_error},
};

const MAX_REJECTION_BODY_BYTES: usize = 16 * 1024;

/// Wraps error responses that did not come from a handler (extractor
/// rejections, unknown routes, wrong methods) in the JSON envelope. The
/// original status code and headers such as `Allow` are kept.
pub async fn json_error_middleware(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }
    if is_json_response(response.headers()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    let message = match to_bytes(body, MAX_REJECTION_BODY_BYTES).await {
        Ok(bytes) => rejection_message(status, &bytes),
        Err(_) => default_message(status),
    };
    if status.is_server_error() {
        log_app_error(&AppError::internal(message.clone()), status);
    }

    let mut wrapped = JsonApiResponse {
        status: status.as_u16(),
        message,
        data: serde_json::Value::Null,
    }
    .into_response();
    copy_headers(&parts.headers, wrapped.headers_mut());
    wrapped
}

fn is_json_response(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            let value = value.to_ascii_lowercase();
            value.starts_with("application/json") || value.contains("+json")
        })
}

fn rejection_message(status: StatusCode, bytes: &Bytes) -> String {
    let message = String::from_utf8_lossy(bytes).trim().to_string();
    if message.is_empty() {
        return default_message(status);
    }
    message
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}

fn copy_headers(src: &HeaderMap, dest: &mut HeaderMap) {
    for (name, value) in src {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        dest.insert(name.clone(), value.clone());
    }
}

//! # Request/Response Logging Middleware
//!
//! Structured logging of every HTTP exchange, correlated by request ID:
//! - Request method, path, query params, user agent, client IP
//! - Request headers at debug level, with credentials redacted
//! - Response status, size, duration (info / warn / error by status class)
//!
//! Bodies are never logged. Requests to [`SENSITIVE_ENDPOINTS`] carry
//! passwords or tokens and are flagged so they are easy to filter out.

use crate::middleware::RequestStamp;
use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Sensitive headers that should not be logged
const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
];

/// Endpoints whose traffic carries passwords or tokens
pub const SENSITIVE_ENDPOINTS: &[&str] = &["/users", "/sessions", "/token/refresh"];

const REDACTED: &str = "***REDACTED***";

/// Header list safe to write to the log.
fn sanitized_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower == *h) {
                Some((name.to_string(), REDACTED.to_string()))
            } else {
                value.to_str().ok().map(|v| (name.to_string(), v.to_string()))
            }
        })
        .collect()
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let is_sensitive = SENSITIVE_ENDPOINTS.contains(&path.as_str());
    let headers = sanitized_headers(req.headers());
    let user_agent = header_str(req.headers(), header::USER_AGENT.as_str());
    let client_ip = header_str(req.headers(), "x-forwarded-for")
        .or_else(|| header_str(req.headers(), "x-real-ip"));

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        user_agent = ?user_agent,
        client_ip = ?client_ip,
        sensitive = is_sensitive,
        "[REQUEST] {} {}{}",
        method,
        path,
        query.as_ref().map(|q| format!("?{}", q)).unwrap_or_default()
    );

    debug!(request_id = %request_id, headers = ?headers, "[REQUEST HEADERS]");

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let status_code = status.as_u16();
    let content_length = header_str(response.headers(), header::CONTENT_LENGTH.as_str())
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0);

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status_code,
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status_code,
            duration_ms = duration.as_millis(),
            size_bytes = content_length,
            "[RESPONSE] {} {} -> {} ({}ms, {} bytes)",
            method,
            path,
            status_code,
            duration.as_millis(),
            content_length
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_credentials_redacted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        headers.insert(header::COOKIE, HeaderValue::from_static("refreshToken=xyz"));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let sanitized = sanitized_headers(&headers);

        assert!(sanitized.contains(&("authorization".to_string(), REDACTED.to_string())));
        assert!(sanitized.contains(&("cookie".to_string(), REDACTED.to_string())));
        assert!(sanitized.contains(&("content-type".to_string(), "application/json".to_string())));
    }
}

//! # Response Mapping Middleware
//!
//! Logs every server error together with the request it answered. Error
//! bodies themselves are rendered by [`AppError`](lib_core::AppError).

use crate::middleware::RequestStamp;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::error;

pub async fn map_res(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let res = next.run(req).await;

    if res.status().is_server_error() {
        error!(
            request_id = %request_id,
            "[RESPONSE] Server error: {} {} -> {}",
            method,
            path,
            res.status()
        );
    }

    res
}

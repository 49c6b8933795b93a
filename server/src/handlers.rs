//! HTTP route handlers for the log server.
//!
//! Bodies are decoded from raw bytes regardless of `Content-Type`, since
//! clients such as `curl -d` label JSON as form data.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use proglog_kernel::log::{Log, LogError, Offset};

use crate::api::{ReadRequest, ReadResponse, WriteRequest, WriteResponse};
use crate::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Log>,
}

/// Handle GET /
pub async fn handle_home() -> &'static str {
    "Home"
}

/// Handle POST /log/write
pub async fn handle_write(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WriteResponse>, ApiError> {
    let request: WriteRequest = serde_json::from_slice(&body)?;

    let offset = state.log.append(request.record.value)?;

    Ok(Json(WriteResponse { offset }))
}

/// Handle GET /log/read
pub async fn handle_read(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReadResponse>, ApiError> {
    let request: ReadRequest = serde_json::from_slice(&body)?;

    let offset = Offset::try_from(request.offset).map_err(|_| LogError::OffsetNotFound)?;
    let record = state.log.read(offset)?;

    Ok(Json(ReadResponse {
        record: record.into(),
    }))
}

/// Reject any verb other than GET on /log/read.
pub async fn handle_read_not_allowed() -> Response {
    method_not_allowed("GET")
}

/// Reject any verb other than POST on /log/write.
pub async fn handle_write_not_allowed() -> Response {
    method_not_allowed("POST")
}

fn method_not_allowed(allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        "Method Not Allowed",
    )
        .into_response()
}

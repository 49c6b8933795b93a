//! Mapping from gateway failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use proglog_kernel::log::LogError;

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was not valid JSON for the endpoint.
    #[error("{0}")]
    BadRequest(#[from] serde_json::Error),

    #[error(transparent)]
    Log(#[from] LogError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Log(LogError::OffsetNotFound) => StatusCode::NOT_FOUND,
            ApiError::Log(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_not_found_maps_to_404() {
        let err = ApiError::from(LogError::OffsetNotFound);

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "offset not found");
    }

    #[test]
    fn malformed_json_maps_to_400() {
        let err = ApiError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}

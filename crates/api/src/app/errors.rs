use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Client-visible request failure, serialized as `{success:false, message}`.
///
/// Upstream detail never rides along: proxies log the underlying error and
/// surface only a localized generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Single-resource lookup miss.
    #[error("{0}")]
    NotFound(String),

    /// Missing or malformed required parameters.
    #[error("{0}")]
    Validation(String),

    /// An upstream dependency answered with an error.
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Anything else; reported generically.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        json_error(status, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Final fallback: a panicking handler becomes a generic 500 JSON error.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    };
    tracing::error!("request handler panicked: {detail}");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "서버 오류 발생")
}

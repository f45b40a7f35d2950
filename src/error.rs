use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Every failure crossing the HTTP boundary becomes the same envelope the
/// admin dashboard and the public site already consume:
/// `{"success": false, "error": <message>}`.
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match self {
            SiteError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            SiteError::Io(_) | SiteError::Serialization(_) | SiteError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

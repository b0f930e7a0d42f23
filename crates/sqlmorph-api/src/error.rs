use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlmorph_core::SqlMorphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("SqlMorph error: {0}")]
    SqlMorph(#[from] SqlMorphError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::SqlMorph(ref err) => match err {
                SqlMorphError::UnsupportedConversion { .. } => {
                    (StatusCode::BAD_REQUEST, self.to_string())
                }
                SqlMorphError::Completion(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

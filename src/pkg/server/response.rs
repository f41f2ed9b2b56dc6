use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use standard_error::StandardError;

/// Uniform success wrapper around every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Json<Envelope<T>> {
        Json(Envelope { status: true, data })
    }
}

/// Domain outcomes mapped to explicit HTTP statuses: validation failures to
/// 400, missing targets to 404, store failures to 500.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(&'static str),
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: &'static str) -> Self {
        ApiError::NotFound(message)
    }
}

impl From<StandardError> for ApiError {
    fn from(err: StandardError) -> Self {
        tracing::error!("store failure: {:?}", err);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };
        let body = Json(json!({
            "status": false,
            "message": message,
            "data": {},
            "code": code.as_u16(),
        }));
        (code, body).into_response()
    }
}

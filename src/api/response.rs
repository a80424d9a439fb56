//! JSON response contract: `{"success": true, ...}` on success,
//! `{"success": false, "error": CODE}` with a 4xx/5xx status on failure.

use crate::errors::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
        }
    }

    pub fn bad_request(code: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code)
    }

    /// Map an application error. Client-side problems keep a specific code;
    /// anything else (database, I/O) becomes a 500 with `fallback` as code
    /// and is logged, since its message is not sent to the client.
    pub fn from_app(err: AppError, fallback: &str) -> Self {
        match err {
            AppError::InvalidWeek(_) => Self::bad_request("INVALID_WEEK"),
            AppError::InvalidMonthKey(_) => Self::bad_request("INVALID_MONTH_KEY"),
            AppError::InvalidHours(_) => Self::bad_request("INVALID_HOURS"),
            AppError::InvalidDate(_) => Self::bad_request("INVALID_DATE"),
            AppError::MissingFields(_) => Self::bad_request("MISSING_FIELDS"),
            AppError::Json(_) => Self::bad_request("INVALID_JSON"),
            AppError::EntryNotFound(_) => Self::new(StatusCode::NOT_FOUND, "ENTRY_NOT_FOUND"),
            AppError::ProjectNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "PROJECT_NOT_FOUND")
            }
            AppError::ItemNotFound(_) => Self::new(StatusCode::NOT_FOUND, "ITEM_NOT_FOUND"),
            AppError::PasswordHashNotSet => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "APP_PASS_HASH_NOT_SET")
            }
            other => {
                tracing::error!(error = %other, code = fallback, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "error": self.code }));
        (self.status, body).into_response()
    }
}

pub type ApiResult = Result<Response, ApiError>;

/// `{"success": true}` merged with the given object fields.
pub fn ok(fields: Value) -> Response {
    let mut map = Map::new();
    map.insert("success".into(), Value::Bool(true));
    if let Value::Object(extra) = fields {
        map.extend(extra);
    }
    (StatusCode::OK, Json(Value::Object(map))).into_response()
}

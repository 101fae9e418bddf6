//! Mapping of service failures to HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::service::ServiceError;

#[derive(Debug)]
pub enum ApiError {
    /// Body or query string could not be parsed
    BadRequest(String),
    Service(ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::EstateNotFound) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::LocationFilled) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(reason) => format!("invalid input: {}", reason),
            Self::Service(ServiceError::Storage(err)) => {
                tracing::error!("Storage failure: {:#}", err);
                "internal server error".to_string()
            }
            Self::Service(err) => err.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use skinscan_core::domain::common::entities::app_errors::CoreError;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),

    /// Failure outside the known taxonomy; the cause is reported as `details`.
    #[error("Failed to process product data: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) | ApiError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ApiErrorResponse {
        match self {
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::BadGateway(message)
            | ApiError::InternalServerError(message) => ApiErrorResponse {
                error: message.clone(),
                details: None,
            },
            ApiError::InvalidBody(details) => ApiErrorResponse {
                error: "Invalid request body".to_string(),
                details: Some(details.clone()),
            },
            ApiError::Unexpected(details) => ApiErrorResponse {
                error: "Failed to process product data".to_string(),
                details: Some(details.clone()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::UpstreamFetch(_) => ApiError::BadGateway(error.to_string()),
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::Parse => ApiError::InternalServerError(error.to_string()),
            CoreError::Internal(details) => ApiError::Unexpected(details),
        }
    }
}

/// JSON extractor that also runs `validator` rules on the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let cases = [
            (
                CoreError::Validation("Query parameter is required".to_string()),
                StatusCode::BAD_REQUEST,
                "Query parameter is required",
            ),
            (
                CoreError::UpstreamFetch("connection refused".to_string()),
                StatusCode::BAD_GATEWAY,
                "Failed to fetch from EWG website",
            ),
            (
                CoreError::NotFound,
                StatusCode::NOT_FOUND,
                "No product found",
            ),
            (
                CoreError::Parse,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse product data",
            ),
        ];

        for (core_error, status, message) in cases {
            let api_error = ApiError::from(core_error);
            assert_eq!(api_error.status(), status);
            assert_eq!(
                api_error.body(),
                ApiErrorResponse {
                    error: message.to_string(),
                    details: None,
                }
            );
        }
    }

    #[test]
    fn test_internal_error_carries_details() {
        let api_error = ApiError::from(CoreError::Internal("body read failed".to_string()));
        assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.body(),
            ApiErrorResponse {
                error: "Failed to process product data".to_string(),
                details: Some("body read failed".to_string()),
            }
        );
    }

    #[test]
    fn test_details_are_omitted_when_absent() {
        let body = serde_json::to_value(ApiError::NotFound("No product found".to_string()).body())
            .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "No product found" }));
    }
}

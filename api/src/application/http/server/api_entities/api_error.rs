use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use fridgechef_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Self::BadRequest(message) | Self::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            Self::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::BadGateway(message) => (StatusCode::BAD_GATEWAY, message),
        };
        (status, Json(ApiErrorResponse { message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::Configuration(message) => Self::InternalServerError(message),
            CoreError::ExternalServiceError(message) => Self::BadGateway(message),
            CoreError::Invalid(message) => Self::BadRequest(message),
            CoreError::InternalServerError => {
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Json extractor that also runs `validator` rules, rejecting with 400.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|errors| ApiError::ValidationError(errors.to_string()))?;

        Ok(Self(payload))
    }
}

use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodlytic_core::domain::analysis::entities::AnalysisError;
use serde::Serialize;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        // Every analysis failure is non-fatal and retryable from the user's
        // side; the remediation is always the same.
        ApiError::ServiceUnavailable(format!(
            "Analysis failed: {err}. Please retry or use manual text entry."
        ))
    }
}

/// JSON extractor that runs `validator` checks before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(ValidateJson(value))
    }
}

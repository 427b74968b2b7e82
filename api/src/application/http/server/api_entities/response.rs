use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// Envelope for successful handler results.
pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}

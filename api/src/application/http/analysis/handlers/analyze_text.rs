use axum::extract::State;
use foodlytic_core::domain::analysis::{
    entities::FoodAnalysis,
    ports::AnalysisService,
    value_objects::{AnalysisInput, AnalysisPayload},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::AnalyzeTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "/analysis/text",
    tag = "analysis",
    summary = "Analyze pasted ingredient text",
    description = "Sends the ingredient list to the model and returns the structured safety report",
    responses(
        (status = 200, body = AnalyzeResponse)
    ),
    request_body = AnalyzeTextRequest
)]
pub async fn analyze_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeTextRequest>,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let result = state
        .service
        .analyze(AnalysisInput {
            payload: AnalysisPayload::Text(payload.text_input),
            language: payload.language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse { data: result }))
}

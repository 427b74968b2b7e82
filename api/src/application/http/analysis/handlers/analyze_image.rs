use axum::extract::{Multipart, State};
use foodlytic_core::domain::analysis::{
    ports::AnalysisService,
    value_objects::{AnalysisInput, AnalysisPayload, Language},
};

use crate::application::http::{
    analysis::handlers::analyze_text::AnalyzeResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

#[utoipa::path(
    post,
    path = "/analysis/image",
    tag = "analysis",
    summary = "Analyze a captured or uploaded label image",
    description = "Sends the label photo to the model vision endpoint and returns the structured safety report",
    responses(
        (status = 200, body = AnalyzeResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeResponse>, ApiError> {
    let mut language = Language::default();
    let mut image: Option<(Vec<u8>, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "language" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read language: {e}")))?;
                language = Language::from_code(&value).ok_or_else(|| {
                    ApiError::BadRequest(format!("Unsupported language code: {value}"))
                })?;
            }
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_IMAGE_MIME)
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {e}")))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {MAX_IMAGE_SIZE} bytes"
                    )));
                }

                image = Some((data.to_vec(), mime_type));
            }
            _ => {}
        }
    }

    let (data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .analyze(AnalysisInput {
            payload: AnalysisPayload::Image { data, mime_type },
            language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeResponse { data: result }))
}

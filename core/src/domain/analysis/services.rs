use crate::domain::{
    analysis::{
        entities::{AnalysisError, FoodAnalysis},
        ports::{AnalysisService, LlmClient},
        prompt,
        schema::food_analysis_schema,
        value_objects::{AnalysisInput, AnalysisPayload},
    },
    common::services::Service,
};

impl<L> AnalysisService for Service<L>
where
    L: LlmClient,
{
    async fn analyze(&self, input: AnalysisInput) -> Result<FoodAnalysis, AnalysisError> {
        let prompt = prompt::build(&input);
        let response_schema = food_analysis_schema();

        let raw_response = match input.payload {
            AnalysisPayload::Text(_) => {
                self.llm_client
                    .generate_with_text(
                        prompt.system_instruction,
                        prompt.user_text,
                        response_schema,
                    )
                    .await?
            }
            AnalysisPayload::Image { data, mime_type } => {
                self.llm_client
                    .generate_with_image(
                        prompt.system_instruction,
                        prompt.user_text,
                        data,
                        mime_type,
                        response_schema,
                    )
                    .await?
            }
        };

        let raw_response = raw_response.trim();
        if raw_response.is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }

        // Schema conformance is a verified boundary: parse and validate,
        // never hand a partially-populated report to the caller.
        let analysis: FoodAnalysis = serde_json::from_str(raw_response).map_err(|e| {
            tracing::error!("Failed to parse model response: {}", e);
            AnalysisError::MalformedResponse(e.to_string())
        })?;

        Ok(analysis)
    }
}

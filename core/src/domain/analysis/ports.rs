use std::future::Future;

use crate::domain::analysis::{
    entities::{AnalysisError, FoodAnalysis},
    value_objects::AnalysisInput,
};

/// Client trait for the hosted model endpoint. The system's only network
/// boundary; mock this to test the analysis pipeline in isolation.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;

    fn generate_with_image(
        &self,
        system_instruction: String,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}

/// Service trait for label analysis business logic.
///
/// Every call is a fresh round trip: no caching, no deduplication, no
/// automatic retry. An in-flight call runs to completion or failure;
/// discarding a stale result is the caller's responsibility.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        input: AnalysisInput,
    ) -> impl Future<Output = Result<FoodAnalysis, AnalysisError>> + Send;
}

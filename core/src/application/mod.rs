use crate::{
    domain::common::{FoodlyticConfig, services::Service},
    infrastructure::llm::GeminiLlmClient,
};

pub type FoodlyticService = Service<GeminiLlmClient>;

/// Builds the concrete service from configuration.
pub fn create_service(config: FoodlyticConfig) -> FoodlyticService {
    Service::new(GeminiLlmClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
    ))
}

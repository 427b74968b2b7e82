use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::analysis::{entities::AnalysisError, ports::LlmClient};

const TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone)]
pub struct GeminiLlmClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiLlmClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, AnalysisError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                AnalysisError::TransportError(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(AnalysisError::TransportError(format!(
                "{status} - {error_text}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to decode Gemini response envelope: {}", e);
            AnalysisError::TransportError(e.to_string())
        })?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(AnalysisError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyResponse);
        }
        Ok(text)
    }

    fn generation_config(response_schema: serde_json::Value) -> GenerationConfig {
        GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema,
            temperature: TEMPERATURE,
        }
    }
}

impl LlmClient for GeminiLlmClient {
    async fn generate_with_text(
        &self,
        system_instruction: String,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, AnalysisError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part::Text {
                    text: system_instruction,
                }],
            },
            generation_config: Self::generation_config(response_schema),
        };

        self.call_gemini_api(request).await
    }

    async fn generate_with_image(
        &self,
        system_instruction: String,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> Result<String, AnalysisError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_image,
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
            system_instruction: Content {
                parts: vec![Part::Text {
                    text: system_instruction,
                }],
            },
            generation_config: Self::generation_config(response_schema),
        };

        self.call_gemini_api(request).await
    }
}

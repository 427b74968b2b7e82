use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured safety report returned by the model for one analyzed label.
///
/// Field presence mirrors the response schema's `required` list: every field
/// except `product_name` must be present or parsing rejects the whole
/// response. Empty lists are valid results, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    #[serde(default)]
    pub product_name: String,
    pub ingredients: Vec<Ingredient>,
    pub additives: Vec<AdditiveAnalysis>,
    pub health_insights: HealthInsights,
    pub score: f64,
    pub label: HealthLabel,
    pub alternatives: Vec<String>,
    pub verdict: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    /// E-number or other additive code, when the model recognized one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdditiveAnalysis {
    pub name: String,
    pub purpose: String,
    pub safety_level: SafetyLevel,
    pub side_effects: String,
    pub regulatory_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsights {
    pub children_friendly: String,
    pub pregnancy_safe: String,
    pub allergies: String,
    pub dietary: String,
}

/// Risk classification for a single additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SafetyLevel {
    Safe,
    Caution,
    Avoid,
}

/// Overall product classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HealthLabel {
    Healthy,
    Moderate,
    Unhealthy,
}

impl FoodAnalysis {
    /// Additives the model flagged beyond `Safe`. An empty slice means the
    /// product has no detected harmful additives.
    pub fn harmful_additives(&self) -> Vec<&AdditiveAnalysis> {
        self.additives
            .iter()
            .filter(|a| a.safety_level != SafetyLevel::Safe)
            .collect()
    }
}

/// Failure taxonomy for one analysis round trip. Never surfaced past the
/// service boundary as anything but these typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Model response did not match the expected schema: {0}")]
    MalformedResponse(String),

    #[error("Model endpoint call failed: {0}")]
    TransportError(String),
}

use foodlytic_core::domain::analysis::value_objects::Language;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    /// Pasted ingredient list. Rejected here when empty or blank; the prompt
    /// builder assumes validated content.
    #[validate(
        length(
            min = 1,
            max = 5000,
            message = "text_input must be between 1 and 5000 characters"
        ),
        custom(function = non_blank)
    )]
    pub text_input: String,

    #[serde(default)]
    pub language: Language,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("text_input must not be blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_text() {
        let request = AnalyzeTextRequest {
            text_input: String::new(),
            language: Language::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_blank_text() {
        let request = AnalyzeTextRequest {
            text_input: "   \n".to_string(),
            language: Language::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_oversized_text() {
        let request = AnalyzeTextRequest {
            text_input: "a".repeat(5001),
            language: Language::default(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn accepts_a_plain_ingredient_list() {
        let request = AnalyzeTextRequest {
            text_input: "Sugar, Wheat Flour, Sodium Benzoate, Yellow 5".to_string(),
            language: Language::default(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn language_defaults_to_english_when_absent() {
        let request: AnalyzeTextRequest =
            serde_json::from_value(serde_json::json!({ "text_input": "Sugar" })).unwrap();
        assert_eq!(request.language, Language::En);
    }
}

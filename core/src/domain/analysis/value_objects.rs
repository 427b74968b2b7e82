use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed set of report languages offered by the UI selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Bn,
    Ta,
    Te,
    Mr,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hi,
        Language::Bn,
        Language::Ta,
        Language::Te,
        Language::Mr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Mr => "mr",
        }
    }

    /// English display name, embedded verbatim in the model instruction.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
            Language::Ta => "Tamil",
            Language::Te => "Telugu",
            Language::Mr => "Marathi",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }
}

/// Exactly one of pasted text or a captured image backs an analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisPayload {
    Text(String),
    Image { data: Vec<u8>, mime_type: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub payload: AnalysisPayload,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().name(), "English");
    }

    #[test]
    fn language_serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_value(Language::Hi).unwrap(), "hi");
        let parsed: Language = serde_json::from_value(serde_json::json!("ta")).unwrap();
        assert_eq!(parsed, Language::Ta);
    }
}

use crate::domain::analysis::value_objects::{AnalysisInput, AnalysisPayload};

/// Instruction pair sent alongside the fixed response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    pub system_instruction: String,
    pub user_text: String,
}

/// Builds the per-request instruction text for the model.
///
/// Only the instruction and payload vary between requests; the response
/// schema never does. Callers reject empty text before it reaches this
/// builder.
pub fn build(input: &AnalysisInput) -> AnalysisPrompt {
    let lang = input.language.name();

    let system_instruction = format!(
        "You are a Food Safety & Nutrition Analysis AI specialized in identifying additives, \
         preservatives, and health risks in food products.\n\
         Analyze the provided food ingredients and respond ONLY in the following language: {lang}.\n\
         Guidelines:\n\
         1. Extract and normalize all ingredients (including E-numbers).\n\
         2. Classify them (Preservative, Artificial Color, Natural, etc.).\n\
         3. Assess risks based on global standards (FDA, EFSA, WHO).\n\
         4. Provide insights for kids, pregnancy, and common allergies.\n\
         5. Generate a health score (1-10) and a verdict.\n\
         6. Suggest healthier, real-food alternatives found in Indian markets if applicable."
    );

    let user_text = match &input.payload {
        AnalysisPayload::Text(text) => {
            format!("Analyze these ingredients and provide a detailed report in {lang}: {text}")
        }
        AnalysisPayload::Image { .. } => {
            format!("Analyze the ingredients label in this image and provide a detailed report in {lang}.")
        }
    };

    AnalysisPrompt {
        system_instruction,
        user_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::value_objects::Language;

    #[test]
    fn text_mode_inlines_the_literal_ingredients() {
        let input = AnalysisInput {
            payload: AnalysisPayload::Text("Sugar, Wheat Flour, Sodium Benzoate, Yellow 5".into()),
            language: Language::En,
        };

        let prompt = build(&input);
        assert!(prompt.user_text.contains("Sugar, Wheat Flour, Sodium Benzoate, Yellow 5"));
        assert!(prompt.user_text.contains("in English"));
        assert!(prompt.system_instruction.contains("ONLY in the following language: English"));
    }

    #[test]
    fn image_mode_references_the_attached_payload_not_its_bytes() {
        let input = AnalysisInput {
            payload: AnalysisPayload::Image {
                data: vec![0xFF, 0xD8, 0xFF],
                mime_type: "image/jpeg".into(),
            },
            language: Language::En,
        };

        let prompt = build(&input);
        assert!(prompt.user_text.contains("ingredients label in this image"));
    }

    #[test]
    fn target_language_name_is_threaded_through_both_instructions() {
        let input = AnalysisInput {
            payload: AnalysisPayload::Text("Jaggery, Ghee".into()),
            language: Language::Hi,
        };

        let prompt = build(&input);
        assert!(prompt.system_instruction.contains("Hindi"));
        assert!(prompt.user_text.contains("in Hindi"));
    }
}

use serde_json::json;

/// Returns the JSON schema enforced on food analysis model responses.
///
/// The schema is fixed: only the instruction text and payload vary between
/// requests, never this shape.
pub fn food_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "code": { "type": "string" },
                        "category": { "type": "string" }
                    },
                    "required": ["name", "category"]
                }
            },
            "additives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "purpose": { "type": "string" },
                        "safetyLevel": {
                            "type": "string",
                            "enum": ["Safe", "Caution", "Avoid"]
                        },
                        "sideEffects": { "type": "string" },
                        "regulatoryStatus": { "type": "string" }
                    },
                    "required": [
                        "name", "purpose", "safetyLevel", "sideEffects", "regulatoryStatus"
                    ]
                }
            },
            "healthInsights": {
                "type": "object",
                "properties": {
                    "childrenFriendly": { "type": "string" },
                    "pregnancySafe": { "type": "string" },
                    "allergies": { "type": "string" },
                    "dietary": { "type": "string" }
                },
                "required": ["childrenFriendly", "pregnancySafe", "allergies", "dietary"]
            },
            "score": { "type": "number" },
            "label": {
                "type": "string",
                "enum": ["Healthy", "Moderate", "Unhealthy"]
            },
            "alternatives": {
                "type": "array",
                "items": { "type": "string" }
            },
            "verdict": { "type": "string" }
        },
        "required": [
            "ingredients", "additives", "healthInsights", "score", "label",
            "alternatives", "verdict"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_stable_across_calls() {
        assert_eq!(food_analysis_schema(), food_analysis_schema());
    }

    #[test]
    fn schema_requires_every_report_field_except_product_name() {
        let schema = food_analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            [
                "ingredients",
                "additives",
                "healthInsights",
                "score",
                "label",
                "alternatives",
                "verdict"
            ]
        );
        assert!(schema["properties"]["productName"].is_object());
    }

    #[test]
    fn schema_constrains_enums_to_declared_values() {
        let schema = food_analysis_schema();

        assert_eq!(
            schema["properties"]["additives"]["items"]["properties"]["safetyLevel"]["enum"],
            serde_json::json!(["Safe", "Caution", "Avoid"])
        );
        assert_eq!(
            schema["properties"]["label"]["enum"],
            serde_json::json!(["Healthy", "Moderate", "Unhealthy"])
        );
    }
}

pub mod services;

#[derive(Clone, Debug)]
pub struct FoodlyticConfig {
    pub llm: LlmConfig,
    pub capture: CaptureConfig,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

/// Tunables for the capture session: preferred acquisition resolution and
/// the JPEG quality used when encoding a captured frame.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    pub preferred_width: u32,
    pub preferred_height: u32,
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            preferred_width: 1280,
            preferred_height: 720,
            jpeg_quality: 80,
        }
    }
}

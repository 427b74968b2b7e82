use clap::Parser;
use foodlytic_core::domain::common::{CaptureConfig, FoodlyticConfig, LlmConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodlytic-api", about = "Foodlytic food-label analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Gemini credential. Lives only in the server process so it is never
    /// shipped in client-distributed code.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-3-pro-preview")]
    pub gemini_model: String,
}

impl From<Args> for FoodlyticConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            capture: CaptureConfig::default(),
        }
    }
}

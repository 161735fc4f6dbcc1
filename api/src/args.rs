use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use letaicook_core::{
    domain::common::{ImageSearchConfig, LLMConfig, LetaicookConfig, WorkflowTimeouts},
    infrastructure::{image_search::bing::DEFAULT_BING_ENDPOINT, llm::gemini_client::DEFAULT_GEMINI_BASE_URL},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "letaicook", version, about = "Fridge photo in, recipe out")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub image_search: ImageSearchArgs,

    #[command(flatten)]
    pub workflow: WorkflowArgs,

    #[arg(long, env = "METRICS_DISABLED", default_value_t = false)]
    pub metrics_disabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Fallback filter when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-pro")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ImageSearchArgs {
    #[arg(long = "bing-api-key", env = "BING_API_KEY", hide_env_values = true)]
    pub bing_api_key: String,

    #[arg(long = "bing-endpoint", env = "BING_ENDPOINT", default_value = DEFAULT_BING_ENDPOINT)]
    pub bing_endpoint: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct WorkflowArgs {
    #[arg(long = "vision-timeout-secs", env = "VISION_TIMEOUT_SECS", default_value_t = 60)]
    pub vision_timeout_secs: u64,

    #[arg(
        long = "suggestion-timeout-secs",
        env = "SUGGESTION_TIMEOUT_SECS",
        default_value_t = 90
    )]
    pub suggestion_timeout_secs: u64,

    #[arg(
        long = "image-lookup-timeout-secs",
        env = "IMAGE_LOOKUP_TIMEOUT_SECS",
        default_value_t = 15
    )]
    pub image_lookup_timeout_secs: u64,

    /// Idle time after which a session is evicted.
    #[arg(long = "session-ttl-secs", env = "SESSION_TTL_SECS", default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Largest accepted fridge photo, in bytes.
    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

impl From<Args> for LetaicookConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            image_search: ImageSearchConfig {
                bing_api_key: args.image_search.bing_api_key,
                bing_endpoint: args.image_search.bing_endpoint,
            },
            timeouts: WorkflowTimeouts {
                vision: Duration::from_secs(args.workflow.vision_timeout_secs),
                suggestion: Duration::from_secs(args.workflow.suggestion_timeout_secs),
                image_lookup: Duration::from_secs(args.workflow.image_lookup_timeout_secs),
            },
            session_ttl: Duration::from_secs(args.workflow.session_ttl_secs),
        }
    }
}

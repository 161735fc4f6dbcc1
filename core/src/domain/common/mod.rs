use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct LetaicookConfig {
    pub llm: LLMConfig,
    pub image_search: ImageSearchConfig,
    pub timeouts: WorkflowTimeouts,
    /// Sessions untouched for longer than this are evicted.
    pub session_ttl: Duration,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct ImageSearchConfig {
    pub bing_api_key: String,
    pub bing_endpoint: String,
}

/// Upper bounds for each category of collaborator call.
///
/// The suggestion bound applies to the dish and the recipe call separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkflowTimeouts {
    pub vision: Duration,
    pub suggestion: Duration,
    pub image_lookup: Duration,
}

impl Default for WorkflowTimeouts {
    fn default() -> Self {
        Self {
            vision: Duration::from_secs(60),
            suggestion: Duration::from_secs(90),
            image_lookup: Duration::from_secs(15),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}


use std::time::Duration;

use reqwest::Client;
use tokio::{
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};
use tracing::error;

use crate::{
    domain::{
        common::{LetaicookConfig, entities::app_errors::CoreError, services::Service},
        workflow::ports::WorkflowService,
    },
    infrastructure::{
        image_search::BingImageSearch,
        llm::{GeminiLLMClient, LlmChef},
        session::InMemorySessionRepository,
    },
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60);
const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

pub type LetaicookService = Service<
    InMemorySessionRepository,
    LlmChef<GeminiLLMClient>,
    LlmChef<GeminiLLMClient>,
    BingImageSearch,
>;

pub fn create_service(config: LetaicookConfig) -> Result<LetaicookService, CoreError> {
    let client = Client::builder()
        .user_agent(concat!("letaicook/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            CoreError::InternalServerError(format!("Failed to build HTTP client: {}", e))
        })?;

    let chef = LlmChef::new(GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
        client.clone(),
    ));
    let image_search = BingImageSearch::new(
        config.image_search.bing_api_key,
        config.image_search.bing_endpoint,
        client,
    );

    Ok(Service::new(
        InMemorySessionRepository::default(),
        chef.clone(),
        chef,
        image_search,
        config.timeouts,
    ))
}

/// Periodically evicts sessions idle for longer than `session_ttl`.
///
/// The sweep runs every `session_ttl`, capped to a minute. Abort the returned
/// handle to stop it.
pub fn spawn_session_sweeper<W>(service: W, session_ttl: Duration) -> JoinHandle<()>
where
    W: WorkflowService + 'static,
{
    let period = session_ttl.clamp(MIN_SWEEP_PERIOD, MAX_SWEEP_PERIOD);

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = service.evict_idle_sessions(session_ttl).await {
                error!("Failed to evict idle sessions: {}", e);
            }
        }
    })
}

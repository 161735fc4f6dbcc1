use reqwest::Client;
use serde::Deserialize;

use crate::domain::{common::entities::app_errors::CoreError, workflow::ports::DishImageLookup};

pub const DEFAULT_BING_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/images/search";

#[derive(Debug, Clone)]
pub struct BingImageSearch {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct BingImagesResponse {
    #[serde(default)]
    value: Vec<BingImage>,
}

#[derive(Debug, Deserialize)]
struct BingImage {
    #[serde(rename = "contentUrl")]
    content_url: Option<String>,
}

impl BingImagesResponse {
    fn first_content_url(self) -> Option<String> {
        self.value
            .into_iter()
            .next()
            .and_then(|image| image.content_url)
            .filter(|url| !url.is_empty())
    }
}

impl BingImageSearch {
    pub fn new(api_key: String, endpoint: String, client: Client) -> Self {
        Self {
            api_key,
            endpoint,
            client,
        }
    }
}

impl DishImageLookup for BingImageSearch {
    async fn find_image(&self, query: String) -> Result<Option<String>, CoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .query(&[("q", query.as_str()), ("count", "1")])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Bing image search request failed: {}", e);
                CoreError::ExternalServiceError(format!("Image search error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Bing image search error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Image search returned error: {} - {}",
                status, error_text
            )));
        }

        let images: BingImagesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Bing response: {}", e);
            CoreError::MalformedResponse(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(images.first_content_url())
    }
}

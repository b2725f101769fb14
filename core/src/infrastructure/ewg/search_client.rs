use reqwest::Client;
use tracing::{debug, error};

use crate::domain::{
    common::{ProductLookupConfig, entities::app_errors::CoreError},
    product::ports::ProductSearchClient,
};

#[derive(Debug, Clone)]
pub struct EwgSearchClient {
    search_url: String,
    client: Client,
}

impl EwgSearchClient {
    pub fn new(config: &ProductLookupConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            CoreError::Internal(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            search_url: config.search_url.clone(),
            client,
        })
    }

    /// Search page URL with `query` percent-encoded into the `search` parameter.
    pub fn search_url_for(&self, query: &str) -> String {
        let separator = if self.search_url.contains('?') {
            '&'
        } else {
            '?'
        };

        format!(
            "{}{}search={}",
            self.search_url,
            separator,
            urlencoding::encode(query)
        )
    }
}

impl ProductSearchClient for EwgSearchClient {
    async fn fetch_search_page(&self, query: String) -> Result<String, CoreError> {
        let url = self.search_url_for(&query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("EWG search request failed: {}", e);
            CoreError::UpstreamFetch(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("EWG search returned error status: {}", status);
            return Err(CoreError::UpstreamFetch(format!(
                "EWG search returned {}",
                status
            )));
        }

        let html = response.text().await.map_err(|e| {
            error!("Failed to read EWG search response: {}", e);
            CoreError::Internal(e.to_string())
        })?;

        debug!(bytes = html.len(), "EWG search page fetched");
        Ok(html)
    }
}

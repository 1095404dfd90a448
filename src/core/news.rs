use reqwest::Client;

use crate::domain::model::{NewsItem, NewsResponse};
use crate::utils::error::Result;

/// Client for the mediastack-style news search endpoint.
pub struct NewsClient {
    client: Client,
    endpoint: String,
}

impl NewsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One GET for the newest English articles matching `keyword`, published
    /// on `date` (YYYY-MM-DD), capped at `limit` results.
    pub async fn fetch(
        &self,
        api_key: &str,
        keyword: &str,
        date: &str,
        limit: usize,
    ) -> Result<Vec<NewsItem>> {
        tracing::debug!("Requesting news from {}", self.endpoint);
        let limit = limit.to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("access_key", api_key),
                ("keywords", keyword),
                ("languages", "en"),
                ("sort", "published_desc"),
                ("date", date),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("News response status: {}", response.status());
        let payload: NewsResponse = response.json().await?;
        Ok(payload.data)
    }
}

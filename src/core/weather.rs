use reqwest::Client;

use crate::domain::model::{WeatherObservation, WeatherResponse};
use crate::utils::error::{BriefError, Result};

/// Client for the weatherbit-style current-conditions endpoint.
pub struct WeatherClient {
    client: Client,
    endpoint: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One GET for current conditions; the report is the first element of
    /// the provider's `data` array.
    pub async fn fetch(
        &self,
        api_key: &str,
        city: &str,
        country: &str,
    ) -> Result<WeatherObservation> {
        tracing::debug!("Requesting weather from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("city", city), ("country", country), ("key", api_key)])
            .send()
            .await?
            .error_for_status()?;

        let payload: WeatherResponse = response.json().await?;
        payload
            .data
            .into_iter()
            .next()
            .ok_or_else(|| BriefError::PayloadError {
                message: "weather response contained no observations".to_string(),
            })
    }
}

use reqwest::Client;

use crate::domain::model::Task;
use crate::utils::error::Result;

/// Client for the Todoist-style REST task list.
pub struct TaskClient {
    client: Client,
    endpoint: String,
}

impl TaskClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One bearer-authenticated GET returning the caller's open tasks in
    /// API response order. No pagination beyond the single call.
    pub async fn fetch(&self, api_key: &str) -> Result<Vec<Task>> {
        tracing::debug!("Requesting open tasks from {}", self.endpoint);

        let tasks = self
            .client
            .get(&self.endpoint)
            .bearer_auth(api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Task>>()
            .await?;

        Ok(tasks)
    }
}

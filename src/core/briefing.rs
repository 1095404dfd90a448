use std::fmt::Display;

use chrono::Local;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::Credentials;
use crate::core::mailer::Mailer;
use crate::core::news::NewsClient;
use crate::core::tasks::TaskClient;
use crate::core::weather::WeatherClient;
use crate::core::{digest, ConfigProvider};
use crate::domain::model::EmailMessage;
use crate::utils::error::Result;

pub const SUBJECT: &str = "Your Morning Update 🚀";

/// Sequences the briefing run: fetch news, weather and tasks, compose the
/// digest, mail it to the sender's own address. A fetch failure only
/// degrades its section; nothing aborts the run.
pub struct BriefingEngine<C, T> {
    config: C,
    credentials: Credentials,
    mailer: Mailer<T>,
}

impl<C: ConfigProvider> BriefingEngine<C, AsyncSmtpTransport<Tokio1Executor>> {
    pub fn with_smtp(config: C, credentials: Credentials) -> Result<Self> {
        let mailer = Mailer::from_config(
            config.smtp_host(),
            config.smtp_port(),
            &credentials.sender,
            &credentials.password,
        )?;
        Ok(Self::new(config, credentials, mailer))
    }
}

impl<C, T> BriefingEngine<C, T>
where
    C: ConfigProvider,
    T: AsyncTransport + Sync,
    T::Error: Display,
{
    pub fn new(config: C, credentials: Credentials, mailer: Mailer<T>) -> Self {
        Self {
            config,
            credentials,
            mailer,
        }
    }

    /// One full run. Returns the delivery status line the driver prints.
    pub async fn run(&self) -> String {
        let date = self
            .config
            .date()
            .map(str::to_string)
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        tracing::info!("Fetching news for {}", date);
        let news = NewsClient::new(self.config.news_endpoint())
            .fetch(
                &self.credentials.news_api_key,
                self.config.keyword(),
                &date,
                self.config.limit(),
            )
            .await;
        if let Err(err) = &news {
            tracing::warn!("News fetch failed: {}", err);
        }

        tracing::info!(
            "Fetching weather for {}, {}",
            self.config.city(),
            self.config.country()
        );
        let weather = WeatherClient::new(self.config.weather_endpoint())
            .fetch(
                &self.credentials.weather_api_key,
                self.config.city(),
                self.config.country(),
            )
            .await;
        if let Err(err) = &weather {
            tracing::warn!("Weather fetch failed: {}", err);
        }

        tracing::info!("Fetching open tasks");
        let tasks = TaskClient::new(self.config.tasks_endpoint())
            .fetch(&self.credentials.todoist_api_key)
            .await;
        if let Err(err) = &tasks {
            tracing::warn!("Task fetch failed: {}", err);
        }

        let body = digest::compose(
            &digest::news_section(&news),
            &digest::weather_section(&weather),
            &digest::tasks_section(&tasks),
        );

        // Self-addressed: sender and recipient are the same mailbox.
        let email = EmailMessage {
            from: self.credentials.sender.clone(),
            to: self.credentials.sender.clone(),
            subject: SUBJECT.to_string(),
            body,
        };

        match self.mailer.send(&email).await {
            Ok(()) => "Email sent successfully.".to_string(),
            Err(err) => {
                tracing::error!("Delivery failed: {}", err);
                format!("Failed to send email. Error: {}", err)
            }
        }
    }
}

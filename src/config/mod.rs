use std::env;
use std::fmt;

use clap::Parser;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};

/// Secrets read once from the environment at startup. A missing variable
/// resolves to the empty string; the affected fetch or send then fails on
/// its own terms and degrades that section.
#[derive(Clone, Default)]
pub struct Credentials {
    pub news_api_key: String,
    pub todoist_api_key: String,
    pub weather_api_key: String,
    pub sender: String,
    pub password: String,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            news_api_key: env_or_empty("NEWS_API_KEY"),
            todoist_api_key: env_or_empty("TODOIST_API_KEY"),
            weather_api_key: env_or_empty("WEATHER_API_KEY"),
            sender: env_or_empty("EMAIL_SENDER"),
            password: env_or_empty("EMAIL_PASSWORD"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("news_api_key", &redact(&self.news_api_key))
            .field("todoist_api_key", &redact(&self.todoist_api_key))
            .field("weather_api_key", &redact(&self.weather_api_key))
            .field("sender", &self.sender)
            .field("password", &redact(&self.password))
            .finish()
    }
}

fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "morning-brief")]
#[command(about = "Assembles a daily briefing and delivers it by email")]
pub struct BriefConfig {
    #[arg(long, default_value = "Dresden")]
    pub city: String,

    #[arg(long, default_value = "DE")]
    pub country: String,

    #[arg(long, default_value = "chatgpt")]
    pub keyword: String,

    #[arg(long, default_value = "3")]
    pub limit: usize,

    #[arg(long, help = "News publication date (YYYY-MM-DD), defaults to today")]
    pub date: Option<String>,

    #[arg(long, default_value = "http://api.mediastack.com/v1/news")]
    pub news_endpoint: String,

    #[arg(long, default_value = "https://api.weatherbit.io/v2.0/current")]
    pub weather_endpoint: String,

    #[arg(long, default_value = "https://api.todoist.com/rest/v2/tasks")]
    pub tasks_endpoint: String,

    #[arg(long, default_value = "smtp-mail.outlook.com")]
    pub smtp_host: String,

    #[arg(long, default_value = "587")]
    pub smtp_port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for BriefConfig {
    fn news_endpoint(&self) -> &str {
        &self.news_endpoint
    }

    fn weather_endpoint(&self) -> &str {
        &self.weather_endpoint
    }

    fn tasks_endpoint(&self) -> &str {
        &self.tasks_endpoint
    }

    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn city(&self) -> &str {
        &self.city
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    fn smtp_port(&self) -> u16 {
        self.smtp_port
    }
}

impl Validate for BriefConfig {
    fn validate(&self) -> Result<()> {
        validate_url("news_endpoint", &self.news_endpoint)?;
        validate_url("weather_endpoint", &self.weather_endpoint)?;
        validate_url("tasks_endpoint", &self.tasks_endpoint)?;
        validate_non_empty_string("city", &self.city)?;
        validate_non_empty_string("country", &self.country)?;
        validate_non_empty_string("smtp_host", &self.smtp_host)?;
        validate_positive_number("limit", self.limit, 1)?;
        Ok(())
    }
}

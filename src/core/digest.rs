//! Section rendering and digest assembly.
//!
//! Each fetcher hands back a typed `Result`; this module decides how a
//! failure reads in the digest. The news section keeps the error detail
//! while weather and tasks collapse to a fixed line. The asymmetry is
//! inherited behavior, kept on purpose.

use crate::domain::model::{NewsItem, Task, WeatherObservation};
use crate::utils::error::Result;

pub const PREAMBLE: &str = "Good morning! Here's your update:";

const NO_TITLE: &str = "No title provided";
const NO_DESCRIPTION: &str = "No description provided";
const NO_URL: &str = "No URL provided";

pub fn news_section(result: &Result<Vec<NewsItem>>) -> String {
    match result {
        Ok(items) => items
            .iter()
            .map(format_news_item)
            .collect::<Vec<_>>()
            .join("\n\n"),
        Err(err) => format!("News information is currently unavailable. Error: {}", err),
    }
}

fn format_news_item(item: &NewsItem) -> String {
    format!(
        "Title: {}\nDescription: {}\nURL: {}",
        item.title.as_deref().unwrap_or(NO_TITLE),
        item.description.as_deref().unwrap_or(NO_DESCRIPTION),
        item.url.as_deref().unwrap_or(NO_URL)
    )
}

pub fn weather_section(result: &Result<WeatherObservation>) -> String {
    match result {
        Ok(observation) => format!(
            "Currently, the weather in {}, {} is {}°C with {}.",
            observation.city_name,
            observation.country_code,
            observation.temp,
            observation.weather.description
        ),
        // Detail swallowed; the provider's error text never reaches the digest.
        Err(_) => "Weather information is currently unavailable.".to_string(),
    }
}

pub fn tasks_section(result: &Result<Vec<Task>>) -> String {
    match result {
        Ok(tasks) => format!(
            "Here are your open tasks: {}",
            tasks
                .iter()
                .map(|task| task.content.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Err(_) => "Could not retrieve tasks.".to_string(),
    }
}

/// Concatenates the three rendered sections under their fixed headers.
/// Sections go in as-is; the composer does not distinguish success text
/// from placeholder text.
pub fn compose(news: &str, weather: &str, tasks: &str) -> String {
    format!(
        "{}\n\n---- NEWS ----\n\n{}\n\n---- WEATHER ----\n\n{}\n\n---- TO-DO LIST ----\n\n{}\n",
        PREAMBLE, news, weather, tasks
    )
}

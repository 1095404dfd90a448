use serde::Deserialize;

/// One article from the news search endpoint. Every field may be absent;
/// rendering substitutes a fixed fallback per missing field.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub data: Vec<NewsItem>,
}

/// Current conditions for one location, as returned by the weather provider.
/// `temp` stays a raw JSON number so the provider's representation passes
/// through to the report unchanged (no unit conversion, no reformatting).
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherObservation {
    pub city_name: String,
    pub country_code: String,
    pub temp: serde_json::Number,
    pub weather: WeatherCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub data: Vec<WeatherObservation>,
}

/// One open task from the task service. `content` is the task title.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub content: String,
}

/// Outbound message, built from credentials and the composed digest right
/// before transmission.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

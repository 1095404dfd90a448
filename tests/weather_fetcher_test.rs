use httpmock::prelude::*;
use morning_brief::core::weather::WeatherClient;
use morning_brief::digest;

#[tokio::test]
async fn test_weather_fetch_formats_one_line_report() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2.0/current")
            .query_param("city", "Dresden")
            .query_param("country", "DE")
            .query_param("key", "weather-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [
                    {
                        "city_name": "Dresden",
                        "country_code": "DE",
                        "temp": 21.4,
                        "weather": {"description": "Few clouds"}
                    }
                ]
            }));
    });

    let client = WeatherClient::new(server.url("/v2.0/current"));
    let result = client.fetch("weather-key", "Dresden", "DE").await;

    mock.assert();
    assert_eq!(
        digest::weather_section(&result),
        "Currently, the weather in Dresden, DE is 21.4°C with Few clouds."
    );
}

#[tokio::test]
async fn test_weather_integer_temperature_passes_through() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2.0/current");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [
                    {
                        "city_name": "Dresden",
                        "country_code": "DE",
                        "temp": -3,
                        "weather": {"description": "Snow"}
                    }
                ]
            }));
    });

    let client = WeatherClient::new(server.url("/v2.0/current"));
    let result = client.fetch("weather-key", "Dresden", "DE").await;

    assert_eq!(
        digest::weather_section(&result),
        "Currently, the weather in Dresden, DE is -3°C with Snow."
    );
}

#[tokio::test]
async fn test_weather_server_error_renders_fixed_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2.0/current");
        then.status(403);
    });

    let client = WeatherClient::new(server.url("/v2.0/current"));
    let result = client.fetch("bad-key", "Dresden", "DE").await;

    assert!(result.is_err());
    assert_eq!(
        digest::weather_section(&result),
        "Weather information is currently unavailable."
    );
}

#[tokio::test]
async fn test_weather_empty_data_renders_fixed_message() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2.0/current");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": []}));
    });

    let client = WeatherClient::new(server.url("/v2.0/current"));
    let result = client.fetch("weather-key", "Nowhere", "XX").await;

    assert!(result.is_err());
    assert_eq!(
        digest::weather_section(&result),
        "Weather information is currently unavailable."
    );
}

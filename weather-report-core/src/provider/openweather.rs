use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Number;
use std::time::Duration;
use tracing::{debug, info};

use crate::{model::WeatherSnapshot, url::redact_api_key};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// `None` waits on the API indefinitely.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    async fn fetch_current(&self, url: &Url) -> Result<WeatherSnapshot> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| {
                format!("Failed to send request to OpenWeather ({})", redact_api_key(url))
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        debug!(bytes = body.len(), "received OpenWeather response");

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| anyhow!("OpenWeather response contained no weather entries"))?;

        let snapshot = WeatherSnapshot {
            temperature_c: parsed.main.temp,
            condition,
            humidity_pct: parsed.main.humidity,
        };

        info!(
            temperature_c = %snapshot.temperature_c,
            condition = %snapshot.condition,
            humidity_pct = snapshot.humidity_pct,
            "fetched current weather"
        );

        Ok(snapshot)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Number,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, url: &Url) -> Result<WeatherSnapshot> {
        self.fetch_current(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CLEAR_SKY: &str =
        r#"{"main":{"temp":21.5,"humidity":60},"weather":[{"description":"clear sky"}]}"#;

    async fn serve(status: u16, body: &str) -> (MockServer, Url) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Seoul"))
            .and(query_param("appid", "KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;

        let url = Url::parse(&format!(
            "{}/data/2.5/weather?q=Seoul&appid=KEY&units=metric",
            server.uri()
        ))
        .unwrap();
        (server, url)
    }

    #[tokio::test]
    async fn parses_current_weather() {
        let (_server, url) = serve(200, CLEAR_SKY).await;

        let snapshot = OpenWeatherProvider::new().get_weather(&url).await.unwrap();

        assert_eq!(
            snapshot,
            WeatherSnapshot {
                temperature_c: Number::from_f64(21.5).unwrap(),
                condition: "clear sky".into(),
                humidity_pct: 60,
            }
        );
        assert_eq!(snapshot.summary("서울"), "서울의 현재 날씨: clear sky, 온도: 21.5°C, 습도: 60%");
    }

    #[tokio::test]
    async fn integer_temperature_prints_without_decimal() {
        let (_server, url) = serve(
            200,
            r#"{"main":{"temp":21,"humidity":60},"weather":[{"description":"clear sky"}]}"#,
        )
        .await;

        let snapshot = OpenWeatherProvider::new().get_weather(&url).await.unwrap();

        assert_eq!(snapshot.temperature_c, Number::from(21));
        assert_eq!(snapshot.summary("서울"), "서울의 현재 날씨: clear sky, 온도: 21°C, 습도: 60%");
    }

    #[tokio::test]
    async fn ignores_extra_fields() {
        let body = r#"{"coord":{"lon":126.97,"lat":37.56},"name":"Seoul","cod":200,
            "main":{"temp":3.0,"feels_like":0.2,"humidity":41,"pressure":1021},
            "weather":[{"id":800,"main":"Clear","description":"맑음"},{"id":701,"description":"mist"}]}"#;
        let (_server, url) = serve(200, body).await;

        let snapshot = OpenWeatherProvider::new().get_weather(&url).await.unwrap();

        assert_eq!(snapshot.condition, "맑음");
        assert_eq!(snapshot.summary("서울"), "서울의 현재 날씨: 맑음, 온도: 3.0°C, 습도: 41%");
    }

    #[tokio::test]
    async fn missing_main_is_an_error() {
        let (_server, url) = serve(200, r#"{"weather":[{"description":"clear sky"}]}"#).await;

        let err = OpenWeatherProvider::new().get_weather(&url).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather current JSON"));
    }

    #[tokio::test]
    async fn empty_weather_list_is_an_error() {
        let (_server, url) =
            serve(200, r#"{"main":{"temp":1.0,"humidity":10},"weather":[]}"#).await;

        let err = OpenWeatherProvider::new().get_weather(&url).await.unwrap_err();
        assert!(err.to_string().contains("no weather entries"));
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let (_server, url) = serve(401, r#"{"cod":401,"message":"Invalid API key."}"#).await;

        let err = OpenWeatherProvider::new().get_weather(&url).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key."));
    }

    #[tokio::test]
    async fn slow_response_hits_configured_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(CLEAR_SKY)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;
        let url = Url::parse(&server.uri()).unwrap();

        let provider = OpenWeatherProvider::with_timeout(Some(Duration::from_millis(100))).unwrap();
        let err = provider.get_weather(&url).await.unwrap_err();

        assert!(err.to_string().contains("Failed to send request to OpenWeather"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "가".repeat(100);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }
}

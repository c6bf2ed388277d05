use chrono::NaiveDateTime;
use reqwest::Url;
use serde_json::Number;
use std::path::PathBuf;

/// The three values one activation extracts from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Kept as the JSON number the provider sent, so `21` and `21.0` print as received.
    pub temperature_c: Number,
    pub condition: String,
    pub humidity_pct: u8,
}

impl WeatherSnapshot {
    /// One-line status, e.g. `서울의 현재 날씨: clear sky, 온도: 21.5°C, 습도: 60%`.
    pub fn summary(&self, city_label: &str) -> String {
        format!(
            "{city_label}의 현재 날씨: {}, 온도: {}°C, 습도: {}%",
            self.condition, self.temperature_c, self.humidity_pct,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub content: String,
    pub generated_at: NaiveDateTime,
}

/// What a single activation produced.
#[derive(Debug, Clone)]
pub struct Activation {
    pub url: Url,
    pub snapshot: WeatherSnapshot,
    pub document: ReportDocument,
    /// `None` when the document was only previewed.
    pub output_path: Option<PathBuf>,
}

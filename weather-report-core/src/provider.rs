use crate::{Config, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use reqwest::Url;
use std::fmt::Debug;

pub mod openweather;

/// Step 2: turn a request URL into a weather snapshot.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, url: &Url) -> anyhow::Result<WeatherSnapshot>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::with_timeout(config.request_timeout())?;
    Ok(Box::new(provider))
}

//! Step 1: build the request URL for the configured city.

use anyhow::Result;
use reqwest::Url;
use tracing::info;

use crate::{config::Config, error::ConfigError};

const API_KEY_PARAM: &str = "appid";

pub fn build_request_url(config: &Config) -> Result<Url> {
    let api_key = config.require_api_key()?;

    let url = Url::parse_with_params(
        &config.base_url,
        &[
            ("q", config.city.as_str()),
            (API_KEY_PARAM, api_key),
            ("units", config.units.as_str()),
        ],
    )
    .map_err(|e| ConfigError::InvalidBaseUrl {
        url: config.base_url.clone(),
        reason: e.to_string(),
    })?;

    info!(url = %redact_api_key(&url), "built weather request URL");
    Ok(url)
}

/// Copy of `url` safe for logs: the API key value is masked.
pub fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut redacted = url.clone();
    if !pairs.is_empty() {
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted
}

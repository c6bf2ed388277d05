use thiserror::Error;

/// Faults in user-supplied configuration, detected before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "No API key configured.\n\
         Hint: run `weather-report configure` or pass `--api-key <KEY>`."
    )]
    MissingApiKey,

    #[error("Unknown timezone '{0}'. Expected an IANA name such as 'Asia/Seoul'.")]
    UnknownTimezone(String),

    #[error("Invalid base_url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

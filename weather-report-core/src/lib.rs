//! Core library for the `weather-report` CLI.
//!
//! This crate defines:
//! - Configuration (city, API key, output path, report timezone)
//! - The four pipeline steps: request URL, weather fetch, report rendering, file write
//! - Shared domain models (snapshot, document, activation)
//!
//! It is used by `weather-report-cli`, but the steps can be driven by any scheduler.

pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod url;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::ConfigError;
pub use model::{Activation, ReportDocument, WeatherSnapshot};
pub use pipeline::{preview, run_activation};
pub use provider::{WeatherProvider, provider_from_config};

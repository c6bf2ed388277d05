//! One activation: URL → snapshot → document → file, strictly in that order.
//!
//! Each step hands its typed result straight to the next one. Spans carry the
//! task names the report has always been published under.

use anyhow::Result;
use tracing::{Instrument, info, info_span};

use crate::{
    clock::Clock,
    config::Config,
    model::Activation,
    provider::WeatherProvider,
    report::build_document,
    url::build_request_url,
    writer::write_report,
};

/// Run all four steps. The first failing step aborts the activation; nothing
/// is written unless every earlier step succeeded.
pub async fn run_activation(
    config: &Config,
    provider: &dyn WeatherProvider,
    clock: &dyn Clock,
) -> Result<Activation> {
    let mut activation = preview(config, provider, clock).await?;

    info_span!("update_readme")
        .in_scope(|| write_report(&config.output_path, &activation.document.content))?;

    activation.output_path = Some(config.output_path.clone());
    info!(path = %config.output_path.display(), "activation finished");
    Ok(activation)
}

/// Steps 1–3 only; the output file is left alone.
pub async fn preview(
    config: &Config,
    provider: &dyn WeatherProvider,
    clock: &dyn Clock,
) -> Result<Activation> {
    let url = info_span!("load_api").in_scope(|| build_request_url(config))?;

    let snapshot = provider
        .get_weather(&url)
        .instrument(info_span!("load_weather_info"))
        .await?;

    let document = info_span!("write_readme").in_scope(|| {
        build_document(&snapshot, config.city_label(), clock.now(), clock.zone_label())
    });

    Ok(Activation { url, snapshot, document, output_path: None })
}

//! Interactive `configure` command.

use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode, Text};
use std::path::PathBuf;
use weather_report_core::Config;

/// Answers collected from the prompts. Blank answers keep the current value.
#[derive(Debug, Default)]
pub struct Answers {
    pub api_key: String,
    pub city: String,
    pub display_name: String,
    pub output_path: String,
    pub timezone: String,
}

pub fn prompt(current: Config) -> Result<Config> {
    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;

    let city = Text::new("City:")
        .with_default(&current.city)
        .prompt()
        .context("Failed to read city")?;

    let label_default = if city == current.city {
        current.city_label().to_string()
    } else {
        city.clone()
    };
    let display_name = Text::new("Display name in the report:")
        .with_default(&label_default)
        .prompt()
        .context("Failed to read display name")?;

    let output_default = current.output_path.display().to_string();
    let output_path = Text::new("Report file:")
        .with_default(&output_default)
        .prompt()
        .context("Failed to read report path")?;

    let timezone = Text::new("Timezone (IANA name, empty for local time):")
        .with_initial_value(current.timezone.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read timezone")?;

    apply_answers(current, Answers { api_key, city, display_name, output_path, timezone })
}

pub fn apply_answers(mut config: Config, answers: Answers) -> Result<Config> {
    let api_key = answers.api_key.trim();
    if !api_key.is_empty() {
        config.api_key = Some(api_key.to_string());
    }

    let city = answers.city.trim();
    if !city.is_empty() && city != config.city {
        config.set_city(city.to_string());
    }

    let display_name = answers.display_name.trim();
    if !display_name.is_empty() && display_name != config.city_label() {
        config.display_name = Some(display_name.to_string());
    }

    let output_path = answers.output_path.trim();
    if !output_path.is_empty() {
        config.output_path = PathBuf::from(output_path);
    }

    let timezone = answers.timezone.trim();
    config.timezone = (!timezone.is_empty()).then(|| timezone.to_string());
    config.report_timezone()?;

    config.require_api_key()?;
    Ok(config)
}

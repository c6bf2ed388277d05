use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use weather_report_core::{Config, SystemClock, preview, provider_from_config, run_activation};

use crate::configure;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-report", version, about = "Publish the current weather as a markdown report")]
pub struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the weather and overwrite the report file.
    Run(Overrides),

    /// Fetch the weather and print the report without writing it.
    Show(Overrides),

    /// Interactively set API key, city, output path and timezone.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

/// Per-invocation overrides on top of the config file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// City to query, e.g. "Seoul".
    #[arg(long)]
    pub city: Option<String>,

    /// Name used in the report text. Defaults to the city.
    #[arg(long)]
    pub display_name: Option<String>,

    /// OpenWeather API key.
    #[arg(long)]
    pub api_key: Option<String>,

    /// Report file to overwrite.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// IANA timezone for the report timestamp, e.g. "Asia/Seoul".
    #[arg(long)]
    pub timezone: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Overrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(city) = self.city {
            config.set_city(city);
        }
        if let Some(name) = self.display_name {
            config.display_name = Some(name);
        }
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(tz) = self.timezone {
            config.timezone = Some(tz);
        }
        if let Some(secs) = self.timeout {
            config.timeout_secs = Some(secs);
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Run(overrides) => {
                let config = load_with(&config_path, overrides)?;
                let provider = provider_from_config(&config)?;
                let clock = SystemClock::from_config(&config)?;

                let activation = run_activation(&config, provider.as_ref(), &clock).await?;

                println!("{}", activation.snapshot.summary(config.city_label()));
                if let Some(path) = activation.output_path {
                    println!("Report written to {}", path.display());
                }
            }
            Command::Show(overrides) => {
                let config = load_with(&config_path, overrides)?;
                let provider = provider_from_config(&config)?;
                let clock = SystemClock::from_config(&config)?;

                let activation = preview(&config, provider.as_ref(), &clock).await?;
                print!("{}", activation.document.content);
            }
            Command::Configure => {
                let current = Config::load_from(&config_path)?;
                let updated = configure::prompt(current)?;
                updated.save_to(&config_path)?;
                println!("Configuration saved to {}", config_path.display());
            }
            Command::ConfigPath => {
                println!("{}", config_path.display());
            }
        }

        Ok(())
    }
}

fn load_with(path: &Path, overrides: Overrides) -> Result<Config> {
    let mut config = Config::load_from(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    overrides.apply(&mut config);
    Ok(config)
}

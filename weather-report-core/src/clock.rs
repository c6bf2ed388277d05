use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::{config::Config, error::ConfigError};

/// Source of the report timestamp.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Label printed next to the timestamp.
    fn zone_label(&self) -> &str;
}

/// Wall clock. Without a zone it reads naive local time, which is what the
/// report has always stamped (and labelled "UTC").
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    zone: Option<Tz>,
}

impl SystemClock {
    pub fn new(zone: Option<Tz>) -> Self {
        Self { zone }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(config.report_timezone()?))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }

    fn zone_label(&self) -> &str {
        self.zone.map_or("UTC", |tz| tz.name())
    }
}

#[derive(Debug, Clone)]
pub struct FixedClock {
    at: NaiveDateTime,
    label: String,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime, label: impl Into<String>) -> Self {
        Self { at, label: label.into() }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }

    fn zone_label(&self) -> &str {
        &self.label
    }
}

use chrono::{DateTime, Utc};
use std::time::SystemTime;

use super::IndexNameBuilder;
use crate::config::{Config, ConfigTrait};
use crate::gateway::DEFAULT_INDEX_NAME;

const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rolls the index daily using the format `{base}-YYYY-MM-dd` so indexes can
/// be managed (dropped, optimized) per day.
pub struct DailyIndexNameBuilder {
    base: String,
    date_format: String,
}

impl Default for DailyIndexNameBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_INDEX_NAME.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl IndexNameBuilder for DailyIndexNameBuilder {
    fn configure(&mut self, cfg: &Config) -> anyhow::Result<()> {
        if let Some(name) = cfg.index().and_then(|i| i.name.as_deref()) {
            self.base = name.to_string();
        }
        if let Some(format) = cfg.naming().and_then(|n| n.date_format.as_deref()) {
            self.date_format = format.to_string();
        }
        Ok(())
    }

    fn index_name(&self, at: SystemTime) -> String {
        let at: DateTime<Utc> = at.into();
        format!("{}-{}", self.base, at.format(&self.date_format))
    }
}

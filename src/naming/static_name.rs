use std::time::SystemTime;

use super::IndexNameBuilder;
use crate::config::{Config, ConfigTrait};
use crate::gateway::DEFAULT_INDEX_NAME;

/// Always writes to the configured base name, no time-based suffix.
pub struct StaticIndexNameBuilder {
    base: String,
}

impl Default for StaticIndexNameBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_INDEX_NAME.to_string(),
        }
    }
}

impl IndexNameBuilder for StaticIndexNameBuilder {
    fn configure(&mut self, cfg: &Config) -> anyhow::Result<()> {
        if let Some(name) = cfg.index().and_then(|i| i.name.as_deref()) {
            self.base = name.to_string();
        }
        Ok(())
    }

    fn index_name(&self, _at: SystemTime) -> String {
        self.base.clone()
    }
}

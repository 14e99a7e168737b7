//! Pluggable index-naming strategies.
//!
//! The write index name is derived from the configured base name by a
//! strategy selected through the `naming.builder` config string. Strategies
//! are registered by id here instead of being loaded dynamically by class
//! name as search-engine sinks traditionally do.

use std::time::SystemTime;

use crate::config::Config;

pub mod daily;
pub mod static_name;

#[cfg(test)]
mod naming_test;

pub use daily::DailyIndexNameBuilder;
pub use static_name::StaticIndexNameBuilder;

/// Registry id of the daily-rolling strategy.
pub const DAILY: &str = "daily";
/// Registry id of the fixed-name strategy.
pub const STATIC: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    #[error("unknown index name builder: {0:?}")]
    UnknownBuilder(String),
}

/// Policy that derives the concrete storage index name from the configured
/// base name and a timestamp.
pub trait IndexNameBuilder: Send + Sync {
    /// Binds the strategy to the loaded configuration.
    fn configure(&mut self, cfg: &Config) -> anyhow::Result<()>;

    /// Returns the index name to write to at the given instant.
    fn index_name(&self, at: SystemTime) -> String;
}

/// Builds the strategy registered under the given id.
pub fn build(id: &str) -> Result<Box<dyn IndexNameBuilder>, NamingError> {
    match id {
        DAILY => Ok(Box::new(DailyIndexNameBuilder::default())),
        STATIC => Ok(Box::new(StaticIndexNameBuilder::default())),
        other => Err(NamingError::UnknownBuilder(other.to_string())),
    }
}

// Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::ttl;

pub const PROD: &str = "prod";
pub const DEV: &str = "dev";
pub const DEBUG: &str = "debug";
pub const TEST: &str = "test";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Elastic {
    #[serde(rename = "elasticsearch")]
    pub elasticsearch: ElasticBox,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElasticBox {
    pub env: String,
    pub logs: Option<Logs>,
    pub rest: Option<Rest>,
    pub index: Option<Index>,
    #[serde(rename = "batch_size")]
    pub batch_size: Option<usize>,
    pub auth: Option<Auth>,
    pub naming: Option<Naming>,
    pub client: Option<Client>,
    pub shutdown: Option<Shutdown>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Logs {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rest {
    /// Comma-separated REST endpoints, e.g. "http://es1:9200,http://es2:9200".
    pub hostnames: Option<String>,
    #[serde(skip)]
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Index {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// TTL specifier string, e.g. "30d" or "12h". Parsed into `ttl_ms` at load time.
    pub ttl: Option<String>,
    #[serde(skip, default = "default_ttl_ms")]
    pub ttl_ms: i64,
}

fn default_ttl_ms() -> i64 {
    ttl::DEFAULT_TTL_MS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Auth {
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Naming {
    /// Naming-strategy id, one of the registry entries ("daily", "static").
    pub builder: Option<String>,
    #[serde(rename = "date_format")]
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Client {
    #[serde(with = "humantime_serde", default)]
    pub timeout: Option<Duration>,
    #[serde(rename = "connect_timeout", with = "humantime_serde", default)]
    pub connect_timeout: Option<Duration>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Shutdown {
    #[serde(with = "humantime_serde", default)]
    pub timeout: Option<Duration>,
}

// Config trait
pub trait ConfigTrait {
    fn logs(&self) -> Option<&Logs>;
    fn is_prod(&self) -> bool;
    fn is_debug(&self) -> bool;
    fn is_dev(&self) -> bool;
    fn is_test(&self) -> bool;
    fn rest(&self) -> Option<&Rest>;
    fn index(&self) -> Option<&Index>;
    fn batch_size(&self) -> Option<usize>;
    fn auth(&self) -> Option<&Auth>;
    fn client(&self) -> Option<&Client>;
    fn naming(&self) -> Option<&Naming>;
    fn shutdown(&self) -> Option<&Shutdown>;
}

// Config type alias for convenience
pub type Config = Elastic;

impl ConfigTrait for Config {
    fn logs(&self) -> Option<&Logs> {
        self.elasticsearch.logs.as_ref()
    }

    fn is_prod(&self) -> bool {
        self.elasticsearch.env == PROD
    }

    fn is_debug(&self) -> bool {
        self.elasticsearch.env == DEBUG
    }

    fn is_dev(&self) -> bool {
        self.elasticsearch.env == DEV
    }

    fn is_test(&self) -> bool {
        self.elasticsearch.env == TEST
    }

    fn rest(&self) -> Option<&Rest> {
        self.elasticsearch.rest.as_ref()
    }

    fn index(&self) -> Option<&Index> {
        self.elasticsearch.index.as_ref()
    }

    fn batch_size(&self) -> Option<usize> {
        self.elasticsearch.batch_size
    }

    fn auth(&self) -> Option<&Auth> {
        self.elasticsearch.auth.as_ref()
    }

    fn client(&self) -> Option<&Client> {
        self.elasticsearch.client.as_ref()
    }

    fn naming(&self) -> Option<&Naming> {
        self.elasticsearch.naming.as_ref()
    }

    fn shutdown(&self) -> Option<&Shutdown> {
        self.elasticsearch.shutdown.as_ref()
    }
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Resolve absolute path
        let abs_path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve absolute config filepath: {:?}", path))?;

        // Read file
        let data = std::fs::read_to_string(&abs_path)
            .with_context(|| format!("read config yaml file {:?}", abs_path))?;

        // Parse YAML
        let mut cfg: Elastic = serde_yaml::from_str(&data)
            .with_context(|| format!("unmarshal yaml from {:?}", abs_path))?;

        cfg.post_process();

        Ok(cfg)
    }

    /// Derives the computed fields from the raw YAML values.
    /// Split out of `load` so tests can build configs in code.
    pub fn post_process(&mut self) {
        if let Some(ref mut rest) = self.elasticsearch.rest {
            if let Some(ref hostnames) = rest.hostnames {
                rest.nodes = hostnames
                    .trim()
                    .split(',')
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        if let Some(ref mut index) = self.elasticsearch.index {
            index.ttl_ms = ttl::DEFAULT_TTL_MS;
            if let Some(ref ttl_str) = index.ttl {
                if !ttl_str.trim().is_empty() {
                    index.ttl_ms = ttl::parse_ttl(ttl_str.trim());
                }
            }
        }
    }
}

// Test config is always available for integration tests
mod test_config;
pub use test_config::new_test_config;

#[cfg(test)]
mod config_test;

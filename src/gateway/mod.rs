//! Gateway assembling the search-engine adapter from configuration.
//!
//! Resolves index defaults, parses the TTL, builds the index-naming strategy
//! and starts the REST client over the configured nodes. All request traffic
//! is delegated verbatim to the client; the gateway itself holds no protocol
//! logic.

use anyhow::{Context, Result};
use bytes::Bytes;
use hyper::Method;
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{error, info};

use crate::client::{Response, RestClient};
use crate::config::{Config, ConfigTrait};
use crate::naming::{self, IndexNameBuilder};
use crate::ttl;

pub const DEFAULT_INDEX_NAME: &str = "esbridge";
pub const DEFAULT_INDEX_TYPE: &str = "logs";
pub const DEFAULT_BATCH_SIZE: usize = 100;

#[cfg(test)]
mod gateway_test;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("no rest client configured")]
    NoClient,
}

pub struct Gateway {
    cfg: Config,
    index_name: String,
    index_type: String,
    batch_size: usize,
    ttl_ms: i64,
    name_builder: Box<dyn IndexNameBuilder>,
    rest_client: Option<Arc<RestClient>>,
}

impl Gateway {
    /// Builds and starts a gateway from the loaded configuration.
    ///
    /// A failing client startup is logged and leaves the gateway without a
    /// live client rather than failing configuration; a missing naming
    /// strategy is a hard configuration error.
    pub fn configure(cfg: Config) -> Result<Self> {
        let index_name = cfg
            .index()
            .and_then(|i| i.name.clone())
            .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());
        let index_type = cfg
            .index()
            .and_then(|i| i.kind.clone())
            .unwrap_or_else(|| DEFAULT_INDEX_TYPE.to_string());
        let batch_size = cfg.batch_size().unwrap_or(DEFAULT_BATCH_SIZE);

        let ttl_ms = cfg.index().map(|i| i.ttl_ms).unwrap_or(ttl::DEFAULT_TTL_MS);
        if let Some(raw) = cfg.index().and_then(|i| i.ttl.as_deref()) {
            info!(
                component = "gateway",
                event = "ttl_configured",
                ttl_ms,
                raw,
                "index TTL resolved"
            );
        }

        let builder_id = cfg
            .naming()
            .and_then(|n| n.builder.as_deref())
            .unwrap_or(naming::DAILY)
            .to_string();
        let mut name_builder = naming::build(&builder_id)
            .context("could not instantiate index name builder")?;
        name_builder.configure(&cfg)?;

        let rest_client = Self::start_client(&cfg);

        Ok(Self {
            cfg,
            index_name,
            index_type,
            batch_size,
            ttl_ms,
            name_builder,
            rest_client,
        })
    }

    /// Starts the REST client when nodes are configured. Startup failure is
    /// logged, not propagated; requests then report a missing client.
    fn start_client(cfg: &Config) -> Option<Arc<RestClient>> {
        let hostnames = cfg.rest().and_then(|r| r.hostnames.as_deref());
        let nodes_configured = cfg.rest().map(|r| !r.nodes.is_empty()).unwrap_or(false);
        if !nodes_configured {
            return None;
        }

        info!(
            component = "gateway",
            event = "client_starting",
            hostnames = hostnames.unwrap_or(""),
            "starting rest client"
        );
        match RestClient::new(cfg) {
            Ok(client) => {
                client.start();
                Some(Arc::new(client))
            }
            Err(e) => {
                error!(
                    component = "gateway",
                    event = "client_start_failed",
                    error = %e,
                    "rest client failed to start"
                );
                None
            }
        }
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn index_type(&self) -> &str {
        &self.index_type
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn ttl_ms(&self) -> i64 {
        self.ttl_ms
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Index name to write to at the given instant, per the configured
    /// naming strategy.
    pub fn write_index_name(&self, at: SystemTime) -> String {
        self.name_builder.index_name(at)
    }

    pub fn rest_client(&self) -> Option<Arc<RestClient>> {
        self.rest_client.as_ref().map(Arc::clone)
    }

    /// Passthrough to the REST client.
    pub async fn execute_request(
        &self,
        method: Method,
        path: &str,
        entity: Option<Bytes>,
    ) -> Result<Response> {
        let client = self.rest_client.as_ref().ok_or(GatewayError::NoClient)?;
        client.execute_request(method, path, entity).await
    }

    /// Stops the REST client.
    pub fn stop(&self) {
        info!(
            component = "gateway",
            event = "stopping",
            "search gateway stopping"
        );
        if let Some(ref client) = self.rest_client {
            client.stop();
        }
    }
}

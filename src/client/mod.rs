//! REST client for the search-engine nodes.
//!
//! Thin transport layer: round-robin node selection, precomputed basic-auth
//! header and per-request timeout. No retry and no backpressure, a failed
//! request surfaces its error to the caller directly.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::header::HeaderValue;
use hyper::{HeaderMap, Method, Request, Uri};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::config::{Config, ConfigTrait};

pub mod hyper_client;


pub use hyper_client::{create_client, HyperClient};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("rest client is not started")]
    NotStarted,
    #[error("no rest nodes configured")]
    NoNodes,
}

/// Response of a REST call, body fully collected.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// REST client over the configured node list.
#[derive(Debug)]
pub struct RestClient {
    client: HyperClient,
    nodes: Vec<String>,
    cursor: AtomicUsize,
    auth_header: Option<HeaderValue>,
    request_timeout: Duration,
    started: AtomicBool,
}

impl RestClient {
    /// Assembles a client from the loaded configuration.
    /// The client is created stopped; call [`RestClient::start`] before use.
    pub fn new(cfg: &Config) -> Result<Self> {
        let nodes: Vec<String> = cfg
            .rest()
            .map(|r| r.nodes.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.trim_end_matches('/').to_string())
            .collect();
        if nodes.is_empty() {
            return Err(ClientError::NoNodes.into());
        }

        let auth_header = match cfg.auth() {
            Some(auth) => {
                let user = auth.user.as_deref().unwrap_or("");
                if user.is_empty() {
                    None
                } else {
                    let password = auth.password.as_deref().unwrap_or("");
                    let token = BASE64.encode(format!("{}:{}", user, password));
                    Some(
                        HeaderValue::from_str(&format!("Basic {}", token))
                            .context("build basic auth header")?,
                    )
                }
            }
            None => None,
        };

        let request_timeout = cfg
            .client()
            .and_then(|c| c.timeout)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let connect_timeout = cfg
            .client()
            .and_then(|c| c.connect_timeout)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT);

        Ok(Self {
            client: create_client(connect_timeout),
            nodes,
            cursor: AtomicUsize::new(0),
            auth_header,
            request_timeout,
            started: AtomicBool::new(false),
        })
    }

    /// Opens the client for requests.
    pub fn start(&self) {
        self.started.store(true, Ordering::Relaxed);
        info!(
            component = "rest_client",
            event = "started",
            nodes = ?self.nodes,
            "rest client started"
        );
    }

    /// Closes the client for requests. Pooled connections are released when
    /// the client is dropped.
    pub fn stop(&self) {
        self.started.store(false, Ordering::Relaxed);
        info!(
            component = "rest_client",
            event = "stopped",
            "rest client stopped"
        );
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Relaxed)
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    fn next_node(&self) -> &str {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        &self.nodes[i % self.nodes.len()]
    }

    /// Issues one REST request against the next node in round-robin order.
    /// `path` is absolute ("/index/_bulk"); `entity` is sent as JSON when set.
    pub async fn execute_request(
        &self,
        method: Method,
        path: &str,
        entity: Option<Bytes>,
    ) -> Result<Response> {
        if !self.is_started() {
            return Err(ClientError::NotStarted.into());
        }

        let node = self.next_node();
        let uri_str = if path.starts_with('/') {
            format!("{}{}", node, path)
        } else {
            format!("{}/{}", node, path)
        };
        let uri: Uri = uri_str
            .parse()
            .with_context(|| format!("invalid request uri {:?}", uri_str))?;

        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ref auth) = self.auth_header {
            builder = builder.header(hyper::header::AUTHORIZATION, auth.clone());
        }

        let req_body: BoxBody<Bytes, hyper::Error> = if let Some(body_bytes) = entity {
            builder = builder.header(hyper::header::CONTENT_TYPE, "application/json");
            Full::new(body_bytes)
                .map_err(|never: std::convert::Infallible| match never {})
                .boxed()
        } else {
            Empty::<Bytes>::new()
                .map_err(|never: std::convert::Infallible| match never {})
                .boxed()
        };

        let req = builder.body(req_body)?;

        let response = match timeout(self.request_timeout, self.client.request(req)).await {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => {
                error!(
                    uri = %uri_str,
                    error = %e,
                    "Hyper client request failed"
                );
                return Err(anyhow::anyhow!("Hyper client error: {} (URI: {})", e, uri_str))
                    .context("Request failed");
            }
            Err(_) => {
                warn!(
                    uri = %uri_str,
                    timeout = ?self.request_timeout,
                    "Request timed out"
                );
                return Err(anyhow::anyhow!(
                    "Request timed out after {:?} (URI: {})",
                    self.request_timeout,
                    uri_str
                ))
                .context("Request timeout");
            }
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let (_, body_stream) = response.into_parts();
        let body = body_stream
            .collect()
            .await
            .context("Failed to read response body")?
            .to_bytes();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

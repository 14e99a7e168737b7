//! Hyper HTTP client configuration for the search-engine REST transport.
//!
//! Connection pool settings sized for a steady stream of bulk/search calls
//! against a handful of nodes rather than a highload proxy fan-out:
//! - Max idle connections per host: 32
//! - Max idle connection duration: 30s
//! - TCP keep-alive: 30s
//! - TCP_NODELAY: enabled
//! - HTTP/1.1 only

use http_body_util::combinators::BoxBody;
use hyper::body::Bytes;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::dns::GaiResolver;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

pub const CONNS_PER_HOST: usize = 32;
pub const MAX_IDLE_CONN_DURATION: Duration = Duration::from_secs(30);

pub type HyperClient = Client<HttpsConnector<HttpConnector<GaiResolver>>, BoxBody<Bytes, hyper::Error>>;

/// Creates a Hyper HTTP client for REST calls against the configured nodes.
///
/// Uses `BoxBody` for requests (supports Empty/Full) and `Incoming` for
/// responses. HTTP/1.1 only so the Host header is sent as a plain header,
/// matching what most search-engine gateways and proxies expect.
pub fn create_client(connect_timeout: Duration) -> HyperClient {
    let resolver = GaiResolver::new();

    let mut http_connector = HttpConnector::new_with_resolver(resolver);
    http_connector.set_nodelay(true);
    http_connector.set_keepalive(Some(Duration::from_secs(30)));
    http_connector.set_connect_timeout(Some(connect_timeout));

    let tls = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .expect("Failed to load native root certificates")
        .https_or_http()
        .enable_http1()
        .wrap_connector(http_connector);

    Client::builder(TokioExecutor::new())
        .pool_idle_timeout(MAX_IDLE_CONN_DURATION)
        .pool_max_idle_per_host(CONNS_PER_HOST)
        .retry_canceled_requests(true)
        .build(tls)
}

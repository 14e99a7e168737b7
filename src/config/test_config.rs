use super::{Config, ElasticBox};
use std::time::Duration;

/// Creates a new test configuration.
pub fn new_test_config() -> Config {
    let mut cfg = Config {
        elasticsearch: ElasticBox {
            env: super::TEST.to_string(),
            logs: Some(super::Logs {
                level: Some("debug".to_string()),
            }),
            rest: Some(super::Rest {
                hostnames: Some("http://localhost:9200,http://localhost:9201".to_string()),
                nodes: Vec::new(),
            }),
            index: Some(super::Index {
                name: Some("events".to_string()),
                kind: Some("event".to_string()),
                ttl: Some("7d".to_string()),
                ttl_ms: crate::ttl::DEFAULT_TTL_MS,
            }),
            batch_size: Some(250),
            auth: Some(super::Auth {
                user: Some("elastic".to_string()),
                password: Some("changeme".to_string()),
            }),
            naming: Some(super::Naming {
                builder: Some("daily".to_string()),
                date_format: Some("%Y-%m-%d".to_string()),
            }),
            client: Some(super::Client {
                timeout: Some(Duration::from_secs(5)),
                connect_timeout: Some(Duration::from_secs(1)),
            }),
            shutdown: Some(super::Shutdown {
                timeout: Some(Duration::from_secs(10)),
            }),
        },
    };
    cfg.post_process();
    cfg
}

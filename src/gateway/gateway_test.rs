#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use hyper::Method;

    use crate::config::new_test_config;
    use crate::gateway::{Gateway, GatewayError};

    #[tokio::test]
    async fn test_configure_resolves_index_settings() {
        let gw = Gateway::configure(new_test_config()).unwrap();

        assert_eq!(gw.index_name(), "events");
        assert_eq!(gw.index_type(), "event");
        assert_eq!(gw.batch_size(), 250);
        assert_eq!(gw.ttl_ms(), 604_800_000); // "7d"
    }

    #[tokio::test]
    async fn test_configure_applies_defaults() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.index = None;
        cfg.elasticsearch.batch_size = None;
        cfg.elasticsearch.naming = None;

        let gw = Gateway::configure(cfg).unwrap();
        assert_eq!(gw.index_name(), "esbridge");
        assert_eq!(gw.index_type(), "logs");
        assert_eq!(gw.batch_size(), 100);
        assert_eq!(gw.ttl_ms(), -1);
    }

    #[tokio::test]
    async fn test_write_index_name_uses_naming_strategy() {
        let gw = Gateway::configure(new_test_config()).unwrap();

        // 2021-03-15T12:00:00Z
        let at = UNIX_EPOCH + Duration::from_secs(1_615_809_600);
        assert_eq!(gw.write_index_name(at), "events-2021-03-15");
    }

    #[tokio::test]
    async fn test_static_naming_strategy_selection() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.naming.as_mut().unwrap().builder = Some("static".to_string());

        let gw = Gateway::configure(cfg).unwrap();
        let at = UNIX_EPOCH + Duration::from_secs(1_615_809_600);
        assert_eq!(gw.write_index_name(at), "events");
    }

    #[tokio::test]
    async fn test_unknown_naming_strategy_fails_configure() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.naming.as_mut().unwrap().builder = Some("hourly".to_string());

        assert!(Gateway::configure(cfg).is_err());
    }

    #[tokio::test]
    async fn test_no_hostnames_means_no_client() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.rest = None;

        let gw = Gateway::configure(cfg).unwrap();
        assert!(gw.rest_client().is_none());

        let err = gw
            .execute_request(Method::GET, "/_cluster/health", None)
            .await
            .unwrap_err();
        match err.downcast_ref::<GatewayError>() {
            Some(GatewayError::NoClient) => {}
            other => panic!("expected NoClient, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_is_started_after_configure() {
        let gw = Gateway::configure(new_test_config()).unwrap();
        let client = gw.rest_client().unwrap();
        assert!(client.is_started());

        gw.stop();
        assert!(!client.is_started());
    }

    #[tokio::test]
    async fn test_stop_without_client_is_noop() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.rest = None;

        let gw = Gateway::configure(cfg).unwrap();
        gw.stop();
    }
}

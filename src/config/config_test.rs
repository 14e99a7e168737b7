#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::{Config, ConfigTrait};

    fn parse(yaml: &str) -> Config {
        let mut cfg: Config = serde_yaml::from_str(yaml).unwrap();
        cfg.post_process();
        cfg
    }

    #[test]
    fn test_full_config_parses() {
        let cfg = parse(
            r#"
elasticsearch:
  env: prod
  logs:
    level: info
  rest:
    hostnames: "http://es1:9200,http://es2:9200"
  index:
    name: events
    type: event
    ttl: 30d
  batch_size: 500
  auth:
    user: elastic
    password: secret
  naming:
    builder: daily
    date_format: "%Y-%m-%d"
  client:
    timeout: 5s
    connect_timeout: 1s
  shutdown:
    timeout: 30s
"#,
        );

        assert!(cfg.is_prod());
        assert_eq!(cfg.logs().unwrap().level.as_deref(), Some("info"));
        assert_eq!(
            cfg.rest().unwrap().nodes,
            vec!["http://es1:9200", "http://es2:9200"]
        );
        assert_eq!(cfg.index().unwrap().name.as_deref(), Some("events"));
        assert_eq!(cfg.index().unwrap().kind.as_deref(), Some("event"));
        assert_eq!(cfg.index().unwrap().ttl_ms, 2_592_000_000);
        assert_eq!(cfg.batch_size(), Some(500));
        assert_eq!(cfg.auth().unwrap().user.as_deref(), Some("elastic"));
        assert_eq!(cfg.naming().unwrap().builder.as_deref(), Some("daily"));
        assert_eq!(cfg.client().unwrap().timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            cfg.client().unwrap().connect_timeout,
            Some(Duration::from_secs(1))
        );
        assert_eq!(
            cfg.shutdown().unwrap().timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_minimal_config_parses() {
        let cfg = parse("elasticsearch:\n  env: dev\n");

        assert!(cfg.is_dev());
        assert!(cfg.rest().is_none());
        assert!(cfg.index().is_none());
        assert_eq!(cfg.batch_size(), None);
    }

    #[test]
    fn test_hostname_splitting_skips_blanks_and_trims() {
        let cfg = parse(
            r#"
elasticsearch:
  env: test
  rest:
    hostnames: " http://a:9200 , ,http://b:9200, "
"#,
        );

        assert_eq!(cfg.rest().unwrap().nodes, vec!["http://a:9200", "http://b:9200"]);
    }

    #[test]
    fn test_absent_ttl_stays_not_configured() {
        let cfg = parse(
            r#"
elasticsearch:
  env: test
  index:
    name: events
"#,
        );

        assert_eq!(cfg.index().unwrap().ttl_ms, -1);
    }

    #[test]
    fn test_blank_ttl_does_not_invoke_parser() {
        let cfg = parse(
            r#"
elasticsearch:
  env: test
  index:
    ttl: "  "
"#,
        );

        assert_eq!(cfg.index().unwrap().ttl_ms, -1);
    }

    #[test]
    fn test_unknown_ttl_unit_disables_ttl() {
        let cfg = parse(
            r#"
elasticsearch:
  env: test
  index:
    ttl: 10x
"#,
        );

        assert_eq!(cfg.index().unwrap().ttl_ms, 0);
    }

    #[test]
    fn test_env_predicates() {
        assert!(parse("elasticsearch:\n  env: prod\n").is_prod());
        assert!(parse("elasticsearch:\n  env: debug\n").is_debug());
        assert!(parse("elasticsearch:\n  env: test\n").is_test());
    }

    #[test]
    fn test_test_config_is_post_processed() {
        let cfg = crate::config::new_test_config();

        assert_eq!(cfg.rest().unwrap().nodes.len(), 2);
        assert_eq!(cfg.index().unwrap().ttl_ms, 604_800_000);
    }
}

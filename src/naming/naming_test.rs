#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::config::new_test_config;
    use crate::naming::{self, NamingError};

    // 2021-03-15T12:00:00Z
    fn fixed_instant() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_615_809_600)
    }

    #[test]
    fn test_daily_builder_appends_date_suffix() {
        let cfg = new_test_config();
        let mut builder = naming::build("daily").unwrap();
        builder.configure(&cfg).unwrap();

        assert_eq!(builder.index_name(fixed_instant()), "events-2021-03-15");
    }

    #[test]
    fn test_daily_builder_honors_custom_date_format() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.naming.as_mut().unwrap().date_format = Some("%Y.%m".to_string());
        let mut builder = naming::build("daily").unwrap();
        builder.configure(&cfg).unwrap();

        assert_eq!(builder.index_name(fixed_instant()), "events-2021.03");
    }

    #[test]
    fn test_daily_builder_default_base_name() {
        let mut cfg = new_test_config();
        cfg.elasticsearch.index = None;
        let mut builder = naming::build("daily").unwrap();
        builder.configure(&cfg).unwrap();

        assert_eq!(builder.index_name(fixed_instant()), "esbridge-2021-03-15");
    }

    #[test]
    fn test_static_builder_returns_base_unchanged() {
        let cfg = new_test_config();
        let mut builder = naming::build("static").unwrap();
        builder.configure(&cfg).unwrap();

        assert_eq!(builder.index_name(fixed_instant()), "events");
        assert_eq!(builder.index_name(SystemTime::now()), "events");
    }

    #[test]
    fn test_unknown_builder_id_is_rejected() {
        let err = naming::build("com.example.Builder").err().unwrap();
        match err {
            NamingError::UnknownBuilder(id) => assert_eq!(id, "com.example.Builder"),
        }
    }
}

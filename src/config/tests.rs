#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use std::time::Duration;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.check_interval, 5000);
            assert_eq!(config.ban_duration, 259200000);
            assert_eq!(config.threads.general_parallelism, 6);
            assert_eq!(config.threads.check_ban_parallelism, 8);
            assert_eq!(config.threads.rule_execute_parallelism, 16);
            assert_eq!(config.threads.downloader_api_parallelism, 8);
            assert!(config.modules.progress_cheat_blocker.enabled);
            assert!(!config.modules.ip_blacklist.enabled);
            assert!(!config.modules.active_probing.enabled);
            assert!(!config.modules.auto_range_ban.enabled);
            assert_eq!(config.modules.auto_range_ban.ipv4_prefix_length, 24);
            assert_eq!(config.modules.auto_range_ban.ipv6_prefix_length, 64);
        }

        #[test]
        fn test_init_is_valid() {
            assert!(Configuration::init().validate().is_ok());
        }

        #[test]
        fn test_toml_roundtrip_keeps_module_settings() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.modules.progress_cheat_blocker.excessive_threshold, 1.5);
            assert_eq!(loaded.modules.peer_id_blacklist.prefixes, config.modules.peer_id_blacklist.prefixes);
        }

        #[test]
        fn test_load_rejects_garbage() {
            assert!(Configuration::load(b"log_level = ").is_err());
        }

        #[test]
        fn test_validate_zero_parallelism() {
            let mut config = Configuration::init();
            config.threads.check_ban_parallelism = 0;
            let error = config.validate().unwrap_err();
            assert_eq!(error.to_string(), "[VALIDATE] threads.check_ban_parallelism must be greater than 0");
        }

        #[test]
        fn test_validate_zero_intervals() {
            let mut config = Configuration::init();
            config.check_interval = 0;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.ban_duration = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_thresholds() {
            let mut config = Configuration::init();
            config.modules.progress_cheat_blocker.excessive_threshold = 0.5;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.modules.progress_cheat_blocker.maximum_difference = f64::NAN;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_blacklist_ips() {
            let mut config = Configuration::init();
            config.modules.ip_blacklist.ips = vec![String::from("10.0.0.1"), String::from("::1")];
            assert!(config.validate().is_ok());
            config.modules.ip_blacklist.ips.push(String::from("not-an-ip"));
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_range_prefixes() {
            let mut config = Configuration::init();
            config.modules.auto_range_ban.ipv4_prefix_length = 32;
            config.modules.auto_range_ban.ipv6_prefix_length = 128;
            assert!(config.validate().is_ok());

            config.modules.auto_range_ban.ipv4_prefix_length = 33;
            let error = config.validate().unwrap_err();
            assert_eq!(error.to_string(), "[VALIDATE] auto_range_ban.ipv4_prefix_length can not exceed 32");

            let mut config = Configuration::init();
            config.modules.auto_range_ban.ipv6_prefix_length = 129;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_active_probing() {
            let mut config = Configuration::init();
            config.modules.active_probing.timeout = 0;
            assert!(config.validate().is_ok(), "disabled module is not checked");

            config.modules.active_probing.enabled = true;
            assert!(config.validate().is_err());

            let mut config = Configuration::init();
            config.modules.active_probing.tcp_ports.push(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_rule_timeout() {
            let mut config = Configuration::init();
            assert_eq!(config.rule_timeout(), None);
            config.threads.rule_timeout = 3;
            assert_eq!(config.rule_timeout(), Some(Duration::from_secs(3)));
        }

        #[test]
        fn test_check_interval_duration() {
            assert_eq!(Configuration::init().check_interval(), Duration::from_millis(5000));
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            assert_eq!(format!("{}", error), "missing");
        }
    }
}

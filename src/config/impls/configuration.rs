use std::fs::File;
use std::io::Write;
use std::net::IpAddr;
use std::time::Duration;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::active_probing_config::ActiveProbingConfig;
use crate::config::structs::auto_range_ban_config::AutoRangeBanConfig;
use crate::config::structs::client_name_blacklist_config::ClientNameBlacklistConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::ip_blacklist_config::IpBlacklistConfig;
use crate::config::structs::modules_config::ModulesConfig;
use crate::config::structs::peer_id_blacklist_config::PeerIdBlacklistConfig;
use crate::config::structs::progress_cheat_blocker_config::ProgressCheatBlockerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::threads_config::ThreadsConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            hide_finish_log: false,
            check_interval: 5000,
            ban_duration: 259200000,
            threads: ThreadsConfig {
                general_parallelism: 6,
                check_ban_parallelism: 8,
                rule_execute_parallelism: 16,
                downloader_api_parallelism: 8,
                rule_timeout: 0
            },
            modules: ModulesConfig {
                ip_blacklist: IpBlacklistConfig {
                    enabled: false,
                    ips: vec![]
                },
                peer_id_blacklist: PeerIdBlacklistConfig {
                    enabled: false,
                    prefixes: vec![String::from("-XL0019-"), String::from("-SD0100-")]
                },
                client_name_blacklist: ClientNameBlacklistConfig {
                    enabled: false,
                    contains: vec![String::from("Xunlei"), String::from("dandanplay")]
                },
                progress_cheat_blocker: ProgressCheatBlockerConfig {
                    enabled: true,
                    minimum_size: 50000000,
                    maximum_difference: 0.1,
                    rewind_maximum_difference: 0.07,
                    block_excessive_clients: true,
                    excessive_threshold: 1.5
                },
                active_probing: ActiveProbingConfig {
                    enabled: false,
                    tcp_ports: vec![80, 443, 8080],
                    timeout: 3000,
                    cache_ttl: 600
                },
                auto_range_ban: AutoRangeBanConfig {
                    enabled: false,
                    ipv4_prefix_length: 24,
                    ipv6_prefix_length: 64
                }
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                environment: String::from("production"),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => return Err(CustomError::new(&format!("could not serialize default configuration: {e}")))
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(self.log_level.as_str())?;

        if self.check_interval == 0 {
            return Err(CustomError::new("[VALIDATE] check_interval must be greater than 0"));
        }
        if self.ban_duration == 0 {
            return Err(CustomError::new("[VALIDATE] ban_duration must be greater than 0"));
        }

        let pools = vec![
            ("general_parallelism", self.threads.general_parallelism),
            ("check_ban_parallelism", self.threads.check_ban_parallelism),
            ("rule_execute_parallelism", self.threads.rule_execute_parallelism),
            ("downloader_api_parallelism", self.threads.downloader_api_parallelism),
        ];
        for (name, width) in pools {
            if width == 0 {
                return Err(CustomError::new(&format!("[VALIDATE] threads.{name} must be greater than 0")));
            }
        }

        let pcb = &self.modules.progress_cheat_blocker;
        if pcb.minimum_size < 0 {
            return Err(CustomError::new("[VALIDATE] progress_cheat_blocker.minimum_size can not be negative"));
        }
        if !(pcb.maximum_difference >= 0.0) {
            return Err(CustomError::new("[VALIDATE] progress_cheat_blocker.maximum_difference can not be negative"));
        }
        if !(pcb.rewind_maximum_difference >= 0.0) {
            return Err(CustomError::new("[VALIDATE] progress_cheat_blocker.rewind_maximum_difference can not be negative"));
        }
        if !(pcb.excessive_threshold >= 1.0) {
            return Err(CustomError::new("[VALIDATE] progress_cheat_blocker.excessive_threshold must be at least 1.0"));
        }

        let probing = &self.modules.active_probing;
        if probing.enabled && probing.timeout == 0 {
            return Err(CustomError::new("[VALIDATE] active_probing.timeout must be greater than 0"));
        }
        if probing.tcp_ports.contains(&0) {
            return Err(CustomError::new("[VALIDATE] active_probing.tcp_ports can not contain port 0"));
        }

        let range = &self.modules.auto_range_ban;
        if range.ipv4_prefix_length > 32 {
            return Err(CustomError::new("[VALIDATE] auto_range_ban.ipv4_prefix_length can not exceed 32"));
        }
        if range.ipv6_prefix_length > 128 {
            return Err(CustomError::new("[VALIDATE] auto_range_ban.ipv6_prefix_length can not exceed 128"));
        }

        for ip in &self.modules.ip_blacklist.ips {
            if ip.parse::<IpAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE] ip_blacklist entry '{ip}' is not a valid IP address")));
            }
        }

        Ok(())
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval)
    }

    pub fn rule_timeout(&self) -> Option<Duration> {
        match self.threads.rule_timeout {
            0 => None,
            seconds => Some(Duration::from_secs(seconds))
        }
    }
}

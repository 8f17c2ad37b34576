use serde::{Deserialize, Serialize};
use crate::config::structs::modules_config::ModulesConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::threads_config::ThreadsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub hide_finish_log: bool,
    /// Milliseconds between two ban waves.
    pub check_interval: u64,
    /// Milliseconds a ban stays in the registry.
    pub ban_duration: u64,
    pub threads: ThreadsConfig,
    pub modules: ModulesConfig,
    pub sentry_config: SentryConfig
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadsConfig {
    pub general_parallelism: usize,
    pub check_ban_parallelism: usize,
    pub rule_execute_parallelism: usize,
    pub downloader_api_parallelism: usize,
    /// Seconds to wait for all module verdicts of one peer, 0 waits forever.
    pub rule_timeout: u64
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProgressCheatBlockerConfig {
    pub enabled: bool,
    /// Torrents smaller than this many bytes are not checked.
    pub minimum_size: i64,
    pub maximum_difference: f64,
    /// Allowed progress drop between two observations, 0 disables rewind tracking.
    pub rewind_maximum_difference: f64,
    pub block_excessive_clients: bool,
    pub excessive_threshold: f64
}

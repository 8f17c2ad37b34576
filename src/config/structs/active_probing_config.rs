use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ActiveProbingConfig {
    pub enabled: bool,
    /// A peer accepting a TCP connection on any of these ports is banned.
    pub tcp_ports: Vec<u16>,
    /// Milliseconds to wait for one connection attempt.
    pub timeout: u64,
    /// Seconds a port scan result is reused for the same IP.
    pub cache_ttl: u64
}

use std::net::IpAddr;
use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use crate::config::structs::active_probing_config::ActiveProbingConfig;

pub struct ActiveProbing {
    pub(crate) config: ActiveProbingConfig,
    pub(crate) outcomes: Mutex<LruCache<IpAddr, PortScan>>,
}

/// Lowest open port found for an IP, `None` when every port was closed.
#[derive(Debug, Clone, Copy)]
pub struct PortScan {
    pub(crate) scanned_at: Instant,
    pub(crate) open_port: Option<u16>,
}

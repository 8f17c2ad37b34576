use std::net::IpAddr;
use std::time::Duration;
use lru::LruCache;
use parking_lot::Mutex;
use smallvec::SmallVec;
use tokio::time::Instant;
use crate::module::structs::client_task::ClientTask;

/// Per-IP progress history, bounded by size and by time since last access.
pub struct ProgressRecorder {
    pub(crate) expire_after_access: Duration,
    pub(crate) entries: Mutex<LruCache<IpAddr, ProgressEntry>>,
}

pub struct ProgressEntry {
    pub(crate) last_access: Instant,
    pub(crate) tasks: SmallVec<[ClientTask; 4]>,
}

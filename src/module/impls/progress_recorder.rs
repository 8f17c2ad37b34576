use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::time::Duration;
use lru::LruCache;
use parking_lot::Mutex;
use smallvec::SmallVec;
use tokio::time::Instant;
use crate::module::structs::client_task::ClientTask;
use crate::module::structs::progress_recorder::{ProgressEntry, ProgressRecorder};

pub const DEFAULT_RECORDER_CAPACITY: usize = 512;
pub const DEFAULT_RECORDER_EXPIRE_AFTER_ACCESS: Duration = Duration::from_secs(30 * 60);

impl ProgressRecorder {
    pub fn new(capacity: usize, expire_after_access: Duration) -> ProgressRecorder
    {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        ProgressRecorder {
            expire_after_access,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Stores `progress` for (`ip`, `torrent_id`) and returns the value it
    /// replaced, `0.0` when nothing was recorded.
    pub fn record(&self, ip: IpAddr, torrent_id: &str, progress: f64) -> f64
    {
        let now = Instant::now();
        let mut lock = self.entries.lock();
        self.pop_expired(&mut lock, now);

        // `get_or_insert_mut` evicts the least recently used IP when full.
        let entry = lock.get_or_insert_mut(ip, || ProgressEntry {
            last_access: now,
            tasks: SmallVec::new(),
        });
        entry.last_access = now;

        match entry.tasks.iter_mut().find(|task| task.torrent_id == torrent_id) {
            Some(task) => {
                let previous = task.progress;
                task.progress = progress;
                previous
            }
            None => {
                entry.tasks.push(ClientTask {
                    torrent_id: torrent_id.to_string(),
                    progress,
                });
                0.0
            }
        }
    }

    /// Last recorded progress; counts as an access.
    pub fn get(&self, ip: IpAddr, torrent_id: &str) -> Option<f64>
    {
        let now = Instant::now();
        let mut lock = self.entries.lock();
        self.pop_expired(&mut lock, now);

        let entry = lock.get_mut(&ip)?;
        entry.last_access = now;
        entry.tasks.iter()
            .find(|task| task.torrent_id == torrent_id)
            .map(|task| task.progress)
    }

    pub fn len(&self) -> usize
    {
        let mut lock = self.entries.lock();
        self.pop_expired(&mut lock, Instant::now());
        lock.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize
    {
        self.entries.lock().cap().get()
    }

    pub fn clear(&self)
    {
        self.entries.lock().clear();
    }

    /// Recency order matches `last_access` order, so expired entries are
    /// always at the least recently used end.
    fn pop_expired(&self, entries: &mut LruCache<IpAddr, ProgressEntry>, now: Instant)
    {
        while let Some((_, entry)) = entries.peek_lru() {
            if now.duration_since(entry.last_access) < self.expire_after_access {
                break;
            }
            entries.pop_lru();
        }
    }
}

impl Default for ProgressRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_RECORDER_CAPACITY, DEFAULT_RECORDER_EXPIRE_AFTER_ACCESS)
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use log::debug;
use crate::ban::structs::ban_metadata::BanMetadata;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_metrics::StatsMetrics;
use crate::stats::traits::metrics::Metrics;
use crate::torrent::structs::peer_address::PeerAddress;

impl StatsMetrics {
    pub fn new() -> StatsMetrics
    {
        StatsMetrics {
            stats: Arc::new(StatsAtomics {
                started: AtomicI64::new(Utc::now().timestamp()),
                ..Default::default()
            }),
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_check: self.stats.timestamp_run_check.load(Ordering::SeqCst),
            checks: self.stats.checks.load(Ordering::SeqCst),
            bans: self.stats.bans.load(Ordering::SeqCst),
            unbans: self.stats.unbans.load(Ordering::SeqCst),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Checks => &self.stats.checks,
            StatsEvent::TimestampCheck => &self.stats.timestamp_run_check,
            StatsEvent::Bans => &self.stats.bans,
            StatsEvent::Unbans => &self.stats.unbans,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }
}

impl Default for StatsMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics for StatsMetrics {
    fn record_check(&self)
    {
        self.update_stats(StatsEvent::Checks, 1);
        self.set_stats(StatsEvent::TimestampCheck, Utc::now().timestamp());
    }

    fn record_peer_ban(&self, address: &PeerAddress, metadata: &BanMetadata)
    {
        debug!("[STATS] Ban recorded for {} by {}", address, metadata.context());
        self.update_stats(StatsEvent::Bans, 1);
    }

    fn record_peer_unban(&self, address: &PeerAddress, metadata: &BanMetadata)
    {
        debug!("[STATS] Unban recorded for {} (banned by {})", address, metadata.context());
        self.update_stats(StatsEvent::Unbans, 1);
    }
}

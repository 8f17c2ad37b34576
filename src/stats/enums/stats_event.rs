//! Statistics event types for tracking ban engine metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `StatsMetrics::update_stats()` and `StatsMetrics::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    Checks,
    TimestampCheck,
    Bans,
    Unbans,
}

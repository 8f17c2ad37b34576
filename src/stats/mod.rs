//! Ban engine statistics.
//!
//! This module defines the metrics collaborator the scheduler and the ban
//! registry report to, and an in-memory implementation backed by atomic
//! counters that the binary logs to the console.
//!
//! # Statistics
//!
//! - Completed check cycles and the timestamp of the last one
//! - Ban and unban events
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from many peer-check tasks without locking.
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_ban_wave::stats::structs::stats_metrics::StatsMetrics;
//!
//! let metrics = Arc::new(StatsMetrics::new());
//! let stats = metrics.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// The metrics collaborator contract.
pub mod traits;

//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Worker pool widths and rule timeout.
pub mod threads_config;

/// Container for the per-module sections.
pub mod modules_config;

/// Progress cheat blocker thresholds.
pub mod progress_cheat_blocker_config;

/// Static IP blacklist.
pub mod ip_blacklist_config;

/// Peer ID prefix blacklist.
pub mod peer_id_blacklist_config;

/// Client name blacklist.
pub mod client_name_blacklist_config;

/// Neighbouring address range ban.
pub mod auto_range_ban_config;

/// Outbound TCP port probing.
pub mod active_probing_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

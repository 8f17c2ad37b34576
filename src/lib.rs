//! # Peer Ban Wave
//!
//! Peer admission control for BitTorrent downloaders.
//!
//! ## Overview
//!
//! A ban wave runs on a fixed interval. It asks every configured downloader
//! for its torrents and their connected peers, runs every enabled rule module
//! against each peer in parallel, records the peers a module wants banned in
//! a shared registry with an expiry, sweeps expired bans and pushes the full
//! ban list back to every downloader.
//!
//! ## Features
//!
//! - **Progress Cheat Blocker**: catches peers whose claimed progress does not
//!   match what was actually uploaded to them, peers that were sent far more
//!   than the torrent size, and peers whose progress goes backwards
//! - **Static Blacklists**: IP addresses, peer id prefixes and client names
//! - **Active Probing**: bans peers that accept connections on configured TCP ports
//! - **Auto Range Ban**: bans peers in the same /24 or /64 as an already banned address
//! - **Plugins**: any `FeatureModule` handed to the server is evaluated with
//!   the built-in ones
//! - **Bounded Parallelism**: separate worker pools for peer checks, module
//!   dispatch, module-internal work and downloader API calls
//! - **Monitoring**: atomic counters, periodic console statistics and Sentry
//!   integration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use peer_ban_wave::config::structs::configuration::Configuration;
//! use peer_ban_wave::server::structs::peer_ban_server::PeerBanServer;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let server = Arc::new(PeerBanServer::new(config, downloaders, metrics, vec![]));
//! tokio::spawn(server.clone().start_ban_wave_loop(shutdown.clone()));
//! ```
//!
//! ## Modules
//!
//! - [`ban`] - Ban registry, ban metadata and module verdicts
//! - [`common`] - Logging setup, error type and time helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`downloader`] - The downloader API contract and its errors
//! - [`engine`] - Worker pools and the rule engine
//! - [`module`] - Rule modules and the module manager
//! - [`server`] - The ban wave itself
//! - [`stats`] - Statistics counters and the metrics sink
//! - [`structs`] - CLI argument parsing
//! - [`torrent`] - Torrents, peers and peer addresses

/// Ban registry and rule verdicts.
///
/// Holds the concurrent `PeerAddress -> BanMetadata` registry and the
/// `BanResult` / `PeerAction` types every rule module answers with.
pub mod ban;

/// Common utilities and shared functionality.
///
/// Contains logging setup, log level parsing, the shared error type and
/// millisecond timestamps.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and creating `config.toml`.
pub mod config;

/// Downloader contract.
///
/// The async trait remote BitTorrent clients implement, their health status
/// and API errors.
pub mod downloader;

/// Rule evaluation.
///
/// Semaphore-bounded worker pools and the engine that fans one peer out to
/// every module and resolves their verdicts.
pub mod engine;

/// Rule modules.
///
/// The `FeatureModule` trait, the built-in modules and the manager that
/// registers and stops them.
pub mod module;

/// The ban wave server.
///
/// Ties downloaders, registry and engine together and runs the scheduled
/// ban wave.
pub mod server;

/// Statistics tracking module.
///
/// Atomic counters for checks, bans and unbans, exposed through the
/// `Metrics` trait.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Torrent and peer data structures.
pub mod torrent;

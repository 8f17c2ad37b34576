//! Downloader contract.
//!
//! A downloader is a BitTorrent client the ban wave talks to through its
//! remote API. The ban wave only needs to list torrents and their connected
//! peers, push the full ban list back and ask the client to re-announce the
//! torrents whose peers were just banned. Connectors for concrete clients
//! implement `Downloader` and are handed to `PeerBanServer::new`.
//!
//! # Health
//!
//! Every downloader carries a `DownloaderLastStatus`. The ban wave resets it
//! to `Healthy` at the start of each tick and flips it to `Error` on any
//! failure; it is the only externally visible error signal.

/// Health status enumeration.
pub mod enums;

/// Error types for downloader API calls.
pub mod errors;

/// The downloader trait.
pub mod traits;

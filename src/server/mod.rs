//! The ban wave.
//!
//! `PeerBanServer` owns the configuration, the downloaders, the ban registry
//! and the rule engine, and runs one ban wave per `check_interval`:
//!
//! 1. every downloader is marked healthy, then processed in configured order:
//!    log in, list torrents and peers, evaluate every peer that finished its
//!    handshake and ban whatever a module asks to ban;
//! 2. expired bans are swept out of the registry;
//! 3. when anything changed, the full ban list is pushed to every downloader
//!    and the torrents that lost peers are relaunched.
//!
//! A downloader refusing the login ends the whole tick early. Every other
//! failure only marks the downloader as `Error` and the wave moves on.
//!
//! # Example
//!
//! ```rust,ignore
//! let server = Arc::new(PeerBanServer::new(config, downloaders, metrics, vec![]));
//! tokio::spawn(server.clone().start_ban_wave_loop(shutdown.clone()));
//! ```

/// Data structures for the server.
pub mod structs;

/// Implementation blocks for the server and the ban wave.
pub mod impls;

//! Swarm data handed over by the downloaders.
//!
//! Torrents and peers are owned by the downloader connectors for the duration
//! of one ban wave; the engine only reads them, and a rule module may keep a
//! derived record of them in its own cache.
//!
//! # Main Components
//!
//! - `PeerAddress` - IP and port of a remote peer, the ban registry key
//! - `Peer` - one remote participant as reported by a downloader
//! - `Torrent` - one monitored swarm

/// Data structures for torrents and peers.
pub mod structs;

/// Implementation blocks for torrents and peers.
pub mod impls;

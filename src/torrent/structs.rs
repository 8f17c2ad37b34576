/// IP and port of a remote peer.
pub mod peer_address;

/// A remote participant of a torrent.
pub mod peer;

/// A monitored swarm.
pub mod torrent;

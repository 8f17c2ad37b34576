pub mod peer_address;
pub mod peer;
pub mod torrent;

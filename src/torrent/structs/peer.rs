use serde::{Deserialize, Serialize};
use crate::torrent::structs::peer_address::PeerAddress;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Peer {
    pub address: PeerAddress,
    /// Empty until the handshake with the peer completed.
    pub peer_id: String,
    pub client_name: String,
    /// Self-reported download progress, 0.0 to 1.0.
    pub progress: f64,
    /// Bytes uploaded to this peer, -1 when the client does not track it.
    pub uploaded: i64,
    pub downloaded: i64
}

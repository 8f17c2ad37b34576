use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::peer_address::PeerAddress;

impl Peer {
    pub fn new(address: PeerAddress, peer_id: &str, client_name: &str, progress: f64, uploaded: i64, downloaded: i64) -> Peer
    {
        Peer {
            address,
            peer_id: peer_id.to_string(),
            client_name: client_name.to_string(),
            progress,
            uploaded,
            downloaded
        }
    }

    /// Peers that have not finished the handshake carry no peer id yet.
    #[inline]
    pub fn is_handshake_complete(&self) -> bool
    {
        !self.peer_id.is_empty()
    }

    #[inline]
    pub fn tracks_uploaded(&self) -> bool
    {
        self.uploaded != -1
    }
}

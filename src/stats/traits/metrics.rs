use crate::ban::structs::ban_metadata::BanMetadata;
use crate::torrent::structs::peer_address::PeerAddress;

/// Sink for engine events. Implementations must tolerate calls from many
/// peer-check tasks at once.
pub trait Metrics: Send + Sync {
    fn record_check(&self);

    fn record_peer_ban(&self, address: &PeerAddress, metadata: &BanMetadata);

    fn record_peer_unban(&self, address: &PeerAddress, metadata: &BanMetadata);
}

use std::sync::Arc;
use parking_lot::RwLock;
use crate::ban::structs::ban_metadata::BanMetadata;
use crate::ban::types::ahash_map::AHashMap;
use crate::stats::traits::metrics::Metrics;
use crate::torrent::structs::peer_address::PeerAddress;

pub struct BanList {
    pub(crate) peers: Arc<RwLock<AHashMap<PeerAddress, BanMetadata>>>,
    pub(crate) metrics: Arc<dyn Metrics>,
}

use std::sync::Arc;
use log::info;
use parking_lot::RwLock;
use crate::ban::structs::ban_list::BanList;
use crate::ban::structs::ban_metadata::BanMetadata;
use crate::ban::types::ahash_map::AHashMap;
use crate::stats::traits::metrics::Metrics;
use crate::torrent::structs::peer_address::PeerAddress;

impl BanList {
    pub fn new(metrics: Arc<dyn Metrics>) -> BanList
    {
        BanList {
            peers: Arc::new(RwLock::new(AHashMap::default())),
            metrics,
        }
    }

    /// Inserts or overwrites the entry, returning the one it replaced.
    pub fn ban(&self, address: PeerAddress, metadata: BanMetadata) -> Option<BanMetadata>
    {
        let previous = {
            let mut lock = self.peers.write();
            lock.insert(address, metadata.clone())
        };
        self.metrics.record_peer_ban(&address, &metadata);
        previous
    }

    pub fn unban(&self, address: &PeerAddress) -> Option<BanMetadata>
    {
        let removed = {
            let mut lock = self.peers.write();
            lock.remove(address)
        };
        if let Some(metadata) = &removed {
            self.metrics.record_peer_unban(address, metadata);
        }
        removed
    }

    pub fn snapshot(&self) -> AHashMap<PeerAddress, BanMetadata>
    {
        let lock = self.peers.read();
        lock.clone()
    }

    pub fn addresses(&self) -> Vec<PeerAddress>
    {
        let lock = self.peers.read();
        lock.keys().copied().collect()
    }

    #[inline]
    pub fn contains(&self, address: &PeerAddress) -> bool
    {
        let lock = self.peers.read();
        lock.contains_key(address)
    }

    pub fn get(&self, address: &PeerAddress) -> Option<BanMetadata>
    {
        let lock = self.peers.read();
        lock.get(address).cloned()
    }

    pub fn len(&self) -> usize
    {
        let lock = self.peers.read();
        lock.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// First banned address matching `predicate`, scanned under the read lock.
    pub fn find<F>(&self, predicate: F) -> Option<PeerAddress>
    where
        F: Fn(&PeerAddress) -> bool
    {
        let lock = self.peers.read();
        lock.keys().find(|address| predicate(address)).copied()
    }

    /// Unbans every entry whose `unban_at` has been reached and returns the removed addresses.
    pub fn sweep_expired(&self, now: i64) -> Vec<PeerAddress>
    {
        let removed: Vec<(PeerAddress, BanMetadata)> = {
            let mut lock = self.peers.write();
            let expired: Vec<PeerAddress> = lock.iter()
                .filter(|(_, metadata)| metadata.is_expired(now))
                .map(|(address, _)| *address)
                .collect();
            expired.into_iter()
                .filter_map(|address| lock.remove(&address).map(|metadata| (address, metadata)))
                .collect()
        };
        for (address, metadata) in &removed {
            self.metrics.record_peer_unban(address, metadata);
            info!("[UNBAN] Peer {} unbanned, banned by {} at {}", address, metadata.context(), metadata.ban_at());
        }
        removed.into_iter().map(|(address, _)| address).collect()
    }
}

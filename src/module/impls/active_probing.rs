use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::future::join_all;
use log::{debug, warn};
use lru::LruCache;
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::time::Instant;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::active_probing_config::ActiveProbingConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::active_probing::{ActiveProbing, PortScan};
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

pub const SCAN_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4096) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN
};

impl ActiveProbing {
    pub fn new(config: &ActiveProbingConfig) -> ActiveProbing
    {
        ActiveProbing {
            config: config.clone(),
            outcomes: Mutex::new(LruCache::new(SCAN_CACHE_CAPACITY)),
        }
    }

    fn cached(&self, ip: IpAddr) -> Option<PortScan>
    {
        let ttl = Duration::from_secs(self.config.cache_ttl);
        let mut lock = self.outcomes.lock();
        let outcome = *lock.get(&ip)?;
        if outcome.scanned_at.elapsed() >= ttl {
            lock.pop(&ip);
            return None;
        }
        Some(outcome)
    }

    /// Tries every configured port on `rule_executor` and returns the lowest
    /// open one.
    pub async fn scan_ports(&self, ip: IpAddr, rule_executor: &WorkerPool) -> Option<u16>
    {
        let timeout = Duration::from_millis(self.config.timeout);
        let handles: Vec<_> = self.config.tcp_ports.iter().map(|&port| {
            rule_executor.spawn(async move {
                match tokio::time::timeout(timeout, TcpStream::connect(SocketAddr::new(ip, port))).await {
                    Ok(Ok(_)) => true,
                    Ok(Err(error)) => {
                        debug!("[PROBING] {}:{} refused: {}", ip, port, error);
                        false
                    }
                    Err(_) => false
                }
            })
        }).collect();

        let mut open_port = None;
        for (port, joined) in self.config.tcp_ports.iter().zip(join_all(handles).await) {
            match joined {
                Ok(true) => {
                    open_port = Some(open_port.map_or(*port, |open: u16| open.min(*port)));
                }
                Ok(false) => {}
                Err(error) => warn!("[PROBING] Connecting to {}:{} failed: {}", ip, port, error)
            }
        }
        open_port
    }
}

#[async_trait]
impl FeatureModule for ActiveProbing {
    fn name(&self) -> &str
    {
        "Active Probing"
    }

    fn config_name(&self) -> &str
    {
        "active_probing"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.config.enabled
    }

    fn stop(&self)
    {
        self.outcomes.lock().clear();
    }

    async fn should_ban_peer(&self, _torrent: &Torrent, peer: &Peer, rule_executor: &WorkerPool) -> BanResult
    {
        let ip = peer.address.ip;
        let open_port = match self.cached(ip) {
            Some(outcome) => outcome.open_port,
            None => {
                let open_port = self.scan_ports(ip, rule_executor).await;
                self.outcomes.lock().put(ip, PortScan { scanned_at: Instant::now(), open_port });
                open_port
            }
        };
        match open_port {
            Some(port) => BanResult::new(self.name(), PeerAction::Ban, format!("TCP port {port} on {ip} accepts connections")),
            None => BanResult::new(self.name(), PeerAction::NoAction, String::from("No scanned port open"))
        }
    }
}

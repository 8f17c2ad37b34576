use std::collections::HashSet;
use std::net::IpAddr;
use async_trait::async_trait;
use log::warn;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::ip_blacklist_config::IpBlacklistConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::ip_blacklist::IpBlacklist;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl IpBlacklist {
    pub fn new(config: &IpBlacklistConfig) -> IpBlacklist
    {
        let mut ips = HashSet::new();
        for entry in &config.ips {
            match entry.parse::<IpAddr>() {
                Ok(ip) => { ips.insert(ip); }
                Err(_) => warn!("[MODULES] Ignoring invalid blacklisted IP '{entry}'")
            }
        }
        IpBlacklist {
            enabled: config.enabled,
            ips,
        }
    }
}

#[async_trait]
impl FeatureModule for IpBlacklist {
    fn name(&self) -> &str
    {
        "IP Blacklist"
    }

    fn config_name(&self) -> &str
    {
        "ip_blacklist"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.enabled
    }

    async fn should_ban_peer(&self, _torrent: &Torrent, peer: &Peer, _rule_executor: &WorkerPool) -> BanResult
    {
        if self.ips.contains(&peer.address.ip) {
            return BanResult::new(self.name(), PeerAction::Ban, format!("IP {} is blacklisted", peer.address.ip));
        }
        BanResult::new(self.name(), PeerAction::NoAction, String::from("IP not blacklisted"))
    }
}

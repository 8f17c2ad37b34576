use std::net::IpAddr;
use std::sync::Arc;
use async_trait::async_trait;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_list::BanList;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::auto_range_ban_config::AutoRangeBanConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::auto_range_ban::AutoRangeBan;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl AutoRangeBan {
    pub fn new(config: &AutoRangeBanConfig, ban_list: Arc<BanList>) -> AutoRangeBan
    {
        AutoRangeBan {
            config: config.clone(),
            ban_list,
        }
    }

    /// Whether `a` and `b` share the configured prefix. Addresses of different
    /// families never match.
    pub fn same_range(&self, a: IpAddr, b: IpAddr) -> bool
    {
        match (a, b) {
            (IpAddr::V4(a), IpAddr::V4(b)) => {
                let mask = u32::MAX.checked_shl(32 - u32::from(self.config.ipv4_prefix_length.min(32))).unwrap_or(0);
                u32::from(a) & mask == u32::from(b) & mask
            }
            (IpAddr::V6(a), IpAddr::V6(b)) => {
                let mask = u128::MAX.checked_shl(128 - u32::from(self.config.ipv6_prefix_length.min(128))).unwrap_or(0);
                u128::from(a) & mask == u128::from(b) & mask
            }
            _ => false
        }
    }

    fn prefix_length(&self, ip: IpAddr) -> u8
    {
        match ip {
            IpAddr::V4(_) => self.config.ipv4_prefix_length,
            IpAddr::V6(_) => self.config.ipv6_prefix_length
        }
    }
}

#[async_trait]
impl FeatureModule for AutoRangeBan {
    fn name(&self) -> &str
    {
        "Auto Range Ban"
    }

    fn config_name(&self) -> &str
    {
        "auto_range_ban"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.config.enabled
    }

    async fn should_ban_peer(&self, _torrent: &Torrent, peer: &Peer, _rule_executor: &WorkerPool) -> BanResult
    {
        let ip = peer.address.ip;
        let neighbour = self.ban_list.find(|banned| *banned != peer.address && self.same_range(banned.ip, ip));
        match neighbour {
            Some(banned) => BanResult::new(
                self.name(),
                PeerAction::Ban,
                format!("{} is in the same /{} range as banned peer {}", ip, self.prefix_length(ip), banned)
            ),
            None => BanResult::new(self.name(), PeerAction::NoAction, String::from("No banned peer in range"))
        }
    }
}

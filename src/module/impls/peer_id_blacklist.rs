use async_trait::async_trait;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::peer_id_blacklist_config::PeerIdBlacklistConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::peer_id_blacklist::PeerIdBlacklist;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl PeerIdBlacklist {
    pub fn new(config: &PeerIdBlacklistConfig) -> PeerIdBlacklist
    {
        PeerIdBlacklist {
            enabled: config.enabled,
            prefixes: config.prefixes.iter()
                .filter(|prefix| !prefix.is_empty())
                .map(|prefix| prefix.to_lowercase())
                .collect(),
        }
    }
}

#[async_trait]
impl FeatureModule for PeerIdBlacklist {
    fn name(&self) -> &str
    {
        "PeerId Blacklist"
    }

    fn config_name(&self) -> &str
    {
        "peer_id_blacklist"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.enabled
    }

    async fn should_ban_peer(&self, _torrent: &Torrent, peer: &Peer, _rule_executor: &WorkerPool) -> BanResult
    {
        let peer_id = peer.peer_id.to_lowercase();
        match self.prefixes.iter().find(|prefix| peer_id.starts_with(prefix.as_str())) {
            Some(prefix) => BanResult::new(self.name(), PeerAction::Ban, format!("PeerId {} matches blacklisted prefix {}", peer.peer_id, prefix)),
            None => BanResult::new(self.name(), PeerAction::NoAction, String::from("PeerId not blacklisted"))
        }
    }
}

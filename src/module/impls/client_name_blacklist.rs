use async_trait::async_trait;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::client_name_blacklist_config::ClientNameBlacklistConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::client_name_blacklist::ClientNameBlacklist;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl ClientNameBlacklist {
    pub fn new(config: &ClientNameBlacklistConfig) -> ClientNameBlacklist
    {
        ClientNameBlacklist {
            enabled: config.enabled,
            contains: config.contains.iter()
                .filter(|fragment| !fragment.is_empty())
                .map(|fragment| fragment.to_lowercase())
                .collect(),
        }
    }
}

#[async_trait]
impl FeatureModule for ClientNameBlacklist {
    fn name(&self) -> &str
    {
        "Client Name Blacklist"
    }

    fn config_name(&self) -> &str
    {
        "client_name_blacklist"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.enabled
    }

    async fn should_ban_peer(&self, _torrent: &Torrent, peer: &Peer, _rule_executor: &WorkerPool) -> BanResult
    {
        let client_name = peer.client_name.to_lowercase();
        match self.contains.iter().find(|fragment| client_name.contains(fragment.as_str())) {
            Some(fragment) => BanResult::new(self.name(), PeerAction::Ban, format!("Client {} matches blacklisted name {}", peer.client_name, fragment)),
            None => BanResult::new(self.name(), PeerAction::NoAction, String::from("Client not blacklisted"))
        }
    }
}

use serde::{Deserialize, Serialize};
use crate::config::structs::active_probing_config::ActiveProbingConfig;
use crate::config::structs::auto_range_ban_config::AutoRangeBanConfig;
use crate::config::structs::client_name_blacklist_config::ClientNameBlacklistConfig;
use crate::config::structs::ip_blacklist_config::IpBlacklistConfig;
use crate::config::structs::peer_id_blacklist_config::PeerIdBlacklistConfig;
use crate::config::structs::progress_cheat_blocker_config::ProgressCheatBlockerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModulesConfig {
    pub ip_blacklist: IpBlacklistConfig,
    pub peer_id_blacklist: PeerIdBlacklistConfig,
    pub client_name_blacklist: ClientNameBlacklistConfig,
    pub progress_cheat_blocker: ProgressCheatBlockerConfig,
    pub active_probing: ActiveProbingConfig,
    pub auto_range_ban: AutoRangeBanConfig
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeerIdBlacklistConfig {
    pub enabled: bool,
    pub prefixes: Vec<String>
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientNameBlacklistConfig {
    pub enabled: bool,
    pub contains: Vec<String>
}

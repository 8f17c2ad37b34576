use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IpBlacklistConfig {
    pub enabled: bool,
    pub ips: Vec<String>
}

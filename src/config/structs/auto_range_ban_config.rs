use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AutoRangeBanConfig {
    pub enabled: bool,
    /// Leading bits an IPv4 peer must share with a banned address, at most 32.
    pub ipv4_prefix_length: u8,
    /// Leading bits an IPv6 peer must share with a banned address, at most 128.
    pub ipv6_prefix_length: u8
}

use std::collections::HashSet;
use std::net::IpAddr;

pub struct IpBlacklist {
    pub(crate) enabled: bool,
    pub(crate) ips: HashSet<IpAddr>,
}

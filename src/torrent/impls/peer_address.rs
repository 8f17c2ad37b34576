use std::fmt;
use std::fmt::Formatter;
use std::net::{IpAddr, SocketAddr};
use crate::torrent::structs::peer_address::PeerAddress;

impl PeerAddress {
    pub fn new(ip: IpAddr, port: u16) -> PeerAddress
    {
        PeerAddress { ip, port }
    }

    pub fn socket_addr(&self) -> SocketAddr
    {
        SocketAddr::new(self.ip, self.port)
    }
}

impl From<SocketAddr> for PeerAddress {
    fn from(addr: SocketAddr) -> PeerAddress {
        PeerAddress::new(addr.ip(), addr.port())
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

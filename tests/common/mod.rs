#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use async_trait::async_trait;
use mockall::mock;
use parking_lot::Mutex;
use peer_ban_wave::config::structs::configuration::Configuration;
use peer_ban_wave::downloader::enums::downloader_last_status::DownloaderLastStatus;
use peer_ban_wave::downloader::errors::DownloaderError;
use peer_ban_wave::downloader::traits::downloader::Downloader;
use peer_ban_wave::server::structs::peer_ban_server::PeerBanServer;
use peer_ban_wave::stats::structs::stats_metrics::StatsMetrics;
use peer_ban_wave::torrent::structs::peer::Peer;
use peer_ban_wave::torrent::structs::peer_address::PeerAddress;
use peer_ban_wave::torrent::structs::torrent::Torrent;

pub type TestConfig = Arc<Configuration>;

/// Progress cheat blocker only, no size floor, 10% tolerance, one hour bans.
pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.ban_duration = 3_600_000;
    config.modules.progress_cheat_blocker.minimum_size = 0;
    config.modules.progress_cheat_blocker.maximum_difference = 0.1;
    config
}

pub fn create_test_server(config: Configuration, downloaders: Vec<Arc<dyn Downloader>>) -> (Arc<PeerBanServer>, Arc<StatsMetrics>) {
    let metrics = Arc::new(StatsMetrics::new());
    let server = PeerBanServer::new(Arc::new(config), downloaders, metrics.clone(), Vec::new());
    (Arc::new(server), metrics)
}

pub fn address(last: u8, port: u16) -> PeerAddress {
    PeerAddress::new(IpAddr::V4(Ipv4Addr::new(198, 51, 100, last)), port)
}

/// A peer claiming 10% while 900 of 1000 bytes were uploaded to it.
pub fn cheating_peer(last: u8) -> Peer {
    Peer::new(address(last, 6881), "-XL0019-abcdefghijkl", "Xunlei 0.0.1.9", 0.1, 900, 0)
}

pub fn honest_peer(last: u8) -> Peer {
    Peer::new(address(last, 51413), "-qB4630-abcdefghijkl", "qBittorrent 4.6.3", 0.95, 900, 0)
}

pub fn torrent(id: &str) -> Torrent {
    Torrent::new(id, &format!("torrent-{id}"), &format!("{id:0>40}"), 1000)
}

pub enum LoginBehaviour {
    Accept,
    Refuse,
    Fail,
}

/// In-memory downloader recording everything the ban wave sends it.
pub struct FakeDownloader {
    pub name: String,
    pub login: Mutex<LoginBehaviour>,
    pub torrents: Mutex<Vec<Torrent>>,
    pub peers: Mutex<HashMap<String, Vec<Peer>>>,
    pub failing_torrent: Mutex<Option<String>>,
    pub ban_lists: Mutex<Vec<Vec<PeerAddress>>>,
    pub relaunches: Mutex<Vec<Vec<Torrent>>>,
    pub status: Mutex<DownloaderLastStatus>,
    pub logins: AtomicUsize,
    pub closed: AtomicBool,
}

impl FakeDownloader {
    pub fn new(name: &str) -> FakeDownloader {
        FakeDownloader {
            name: name.to_string(),
            login: Mutex::new(LoginBehaviour::Accept),
            torrents: Mutex::new(Vec::new()),
            peers: Mutex::new(HashMap::new()),
            failing_torrent: Mutex::new(None),
            ban_lists: Mutex::new(Vec::new()),
            relaunches: Mutex::new(Vec::new()),
            status: Mutex::new(DownloaderLastStatus::Healthy),
            logins: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_torrent(self, torrent: Torrent, peers: Vec<Peer>) -> FakeDownloader {
        self.peers.lock().insert(torrent.id.clone(), peers);
        self.torrents.lock().push(torrent);
        self
    }

    pub fn with_login(self, behaviour: LoginBehaviour) -> FakeDownloader {
        *self.login.lock() = behaviour;
        self
    }

    pub fn set_peers(&self, torrent_id: &str, peers: Vec<Peer>) {
        self.peers.lock().insert(torrent_id.to_string(), peers);
    }

    pub fn last_ban_list(&self) -> Option<Vec<PeerAddress>> {
        self.ban_lists.lock().last().cloned()
    }

    pub fn last_relaunch(&self) -> Option<Vec<Torrent>> {
        self.relaunches.lock().last().cloned()
    }
}

#[async_trait]
impl Downloader for FakeDownloader {
    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint(&self) -> &str {
        "http://127.0.0.1:8080"
    }

    async fn login(&self) -> Result<bool, DownloaderError> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        match *self.login.lock() {
            LoginBehaviour::Accept => Ok(true),
            LoginBehaviour::Refuse => Ok(false),
            LoginBehaviour::Fail => Err(DownloaderError::Api(String::from("connection refused"))),
        }
    }

    async fn get_torrents(&self) -> Result<Vec<Torrent>, DownloaderError> {
        Ok(self.torrents.lock().clone())
    }

    async fn get_peers(&self, torrent: &Torrent) -> Result<Vec<Peer>, DownloaderError> {
        if self.failing_torrent.lock().as_deref() == Some(torrent.id.as_str()) {
            return Err(DownloaderError::Response(format!("peers of {} unavailable", torrent.id)));
        }
        Ok(self.peers.lock().get(&torrent.id).cloned().unwrap_or_default())
    }

    fn last_status(&self) -> DownloaderLastStatus {
        *self.status.lock()
    }

    fn set_last_status(&self, status: DownloaderLastStatus) {
        *self.status.lock() = status;
    }

    async fn set_ban_list(&self, peers: &[PeerAddress]) -> Result<(), DownloaderError> {
        self.ban_lists.lock().push(peers.to_vec());
        Ok(())
    }

    async fn relaunch_torrent_if_needed(&self, torrents: &[Torrent]) -> Result<(), DownloaderError> {
        self.relaunches.lock().push(torrents.to_vec());
        Ok(())
    }

    async fn close(&self) -> Result<(), DownloaderError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

mock! {
    pub Client {}

    #[async_trait]
    impl Downloader for Client {
        fn name(&self) -> &str;
        fn endpoint(&self) -> &str;
        async fn login(&self) -> Result<bool, DownloaderError>;
        async fn get_torrents(&self) -> Result<Vec<Torrent>, DownloaderError>;
        async fn get_peers(&self, torrent: &Torrent) -> Result<Vec<Peer>, DownloaderError>;
        fn last_status(&self) -> DownloaderLastStatus;
        fn set_last_status(&self, status: DownloaderLastStatus);
        async fn set_ban_list(&self, peers: &[PeerAddress]) -> Result<(), DownloaderError>;
        async fn relaunch_torrent_if_needed(&self, torrents: &[Torrent]) -> Result<(), DownloaderError>;
        async fn close(&self) -> Result<(), DownloaderError>;
    }
}

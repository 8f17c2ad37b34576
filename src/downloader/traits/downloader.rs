use async_trait::async_trait;
use crate::downloader::enums::downloader_last_status::DownloaderLastStatus;
use crate::downloader::errors::DownloaderError;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::peer_address::PeerAddress;
use crate::torrent::structs::torrent::Torrent;

/// One remote BitTorrent client. Calls for different torrents may run at the
/// same time; status updates come from the ban wave only.
#[async_trait]
pub trait Downloader: Send + Sync {
    fn name(&self) -> &str;

    fn endpoint(&self) -> &str;

    /// `Ok(false)` means the client refused the credentials.
    async fn login(&self) -> Result<bool, DownloaderError>;

    async fn get_torrents(&self) -> Result<Vec<Torrent>, DownloaderError>;

    async fn get_peers(&self, torrent: &Torrent) -> Result<Vec<Peer>, DownloaderError>;

    fn last_status(&self) -> DownloaderLastStatus;

    fn set_last_status(&self, status: DownloaderLastStatus);

    /// Replaces the client's whole ban list with `peers`.
    async fn set_ban_list(&self, peers: &[PeerAddress]) -> Result<(), DownloaderError>;

    /// Re-announces `torrents` so banned peers drop off; may be empty.
    async fn relaunch_torrent_if_needed(&self, torrents: &[Torrent]) -> Result<(), DownloaderError>;

    async fn close(&self) -> Result<(), DownloaderError>;
}

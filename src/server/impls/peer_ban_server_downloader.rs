use std::collections::HashSet;
use std::sync::Arc;
use futures_util::future::join_all;
use log::{error, info, warn};
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_metadata::BanMetadata;
use crate::common::common::current_time_millis;
use crate::downloader::errors::DownloaderError;
use crate::downloader::traits::downloader::Downloader;
use crate::server::structs::peer_ban_server::PeerBanServer;
use crate::torrent::structs::torrent::Torrent;

impl PeerBanServer {
    /// Checks every connected peer of `downloader` and bans the ones a module
    /// asks to ban. Returns whether anything was banned and the torrents that
    /// lost peers. Any failed API call fails the whole downloader.
    #[tracing::instrument(level = "debug", skip_all, fields(downloader = downloader.name()))]
    pub async fn ban_downloader(&self, downloader: Arc<dyn Downloader>) -> Result<(bool, Vec<Torrent>), DownloaderError>
    {
        let torrents = downloader.get_torrents().await?;

        let mut fetches = Vec::with_capacity(torrents.len());
        for torrent in torrents {
            let downloader = downloader.clone();
            fetches.push(self.downloader_api_pool.spawn(async move {
                let peers = downloader.get_peers(&torrent).await;
                (torrent, peers)
            }));
        }

        let mut torrent_peers = Vec::with_capacity(fetches.len());
        let mut fetch_error = None;
        for joined in join_all(fetches).await {
            match joined {
                Ok((torrent, Ok(peers))) => torrent_peers.push((Arc::new(torrent), peers)),
                Ok((_, Err(error))) => { fetch_error.get_or_insert(error); }
                Err(error) => { fetch_error.get_or_insert(DownloaderError::from(error)); }
            }
        }
        if let Some(error) = fetch_error {
            return Err(error);
        }

        let torrent_count = torrent_peers.len();
        let mut peer_count = 0usize;
        let ban_duration = self.config.ban_duration;
        let mut checks = Vec::new();
        for (torrent, peers) in torrent_peers {
            for peer in peers.into_iter().filter(|peer| peer.is_handshake_complete()) {
                peer_count += 1;
                let torrent = torrent.clone();
                let peer = Arc::new(peer);
                let rule_engine = self.rule_engine.clone();
                let ban_list = self.ban_list.clone();
                checks.push(self.general_pool.spawn(async move {
                    let result = rule_engine.evaluate(torrent.clone(), peer.clone()).await;
                    if result.action != PeerAction::Ban {
                        return None;
                    }
                    let metadata = BanMetadata::for_duration(
                        result.module_name(),
                        current_time_millis(),
                        ban_duration,
                        (*torrent).clone(),
                        (*peer).clone(),
                        &result.reason
                    );
                    warn!(
                        "[BAN] {} ({}, {}) on torrent {} banned by {}: {}",
                        peer.address, peer.peer_id, peer.client_name, torrent.name, result.module_name(), result.reason
                    );
                    ban_list.ban(peer.address, metadata);
                    Some(torrent)
                }));
            }
        }

        let mut seen = HashSet::new();
        let mut relaunch = Vec::new();
        for joined in join_all(checks).await {
            match joined {
                Ok(Some(torrent)) => {
                    if seen.insert(torrent.id.clone()) {
                        relaunch.push((*torrent).clone());
                    }
                }
                Ok(None) => {}
                Err(error) => error!("[CHECK] Peer check on {} failed: {}", downloader.name(), error)
            }
        }

        if !self.config.hide_finish_log {
            info!("[CHECK] {}: checked {} torrent(s) and {} peer(s), {} torrent(s) with new bans", downloader.name(), torrent_count, peer_count, relaunch.len());
        }
        Ok((!relaunch.is_empty(), relaunch))
    }
}

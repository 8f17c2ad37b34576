use std::sync::Arc;
use log::{error, info, warn};
use tokio::time::MissedTickBehavior;
use tokio_shutdown::Shutdown;
use crate::common::common::current_time_millis;
use crate::downloader::enums::downloader_last_status::DownloaderLastStatus;
use crate::downloader::traits::downloader::Downloader;
use crate::server::structs::peer_ban_server::PeerBanServer;
use crate::torrent::structs::torrent::Torrent;

impl PeerBanServer {
    /// One full tick. The check is recorded even when the tick ends early.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn ban_wave(&self)
    {
        self.run_ban_wave().await;
        self.metrics.record_check();
    }

    async fn run_ban_wave(&self)
    {
        for downloader in &self.downloaders {
            downloader.set_last_status(DownloaderLastStatus::Healthy);
        }

        let mut needs_update = false;
        let mut relaunch: Vec<Vec<Torrent>> = vec![Vec::new(); self.downloaders.len()];
        for (index, downloader) in self.downloaders.iter().enumerate() {
            match downloader.login().await {
                Ok(true) => {}
                Ok(false) => {
                    Self::login_refused(downloader.as_ref());
                    return;
                }
                Err(error) => {
                    error!("[BAN WAVE] Login to {} ({}) failed: {}", downloader.name(), downloader.endpoint(), error);
                    downloader.set_last_status(DownloaderLastStatus::Error);
                    continue;
                }
            }

            match self.ban_downloader(downloader.clone()).await {
                Ok((changed, torrents)) => {
                    needs_update |= changed;
                    relaunch[index] = torrents;
                }
                Err(error) => {
                    error!("[BAN WAVE] Checking peers on {} failed: {}", downloader.name(), error);
                    downloader.set_last_status(DownloaderLastStatus::Error);
                }
            }
        }

        let removed = self.ban_list.sweep_expired(current_time_millis());
        if !removed.is_empty() {
            info!("[BAN WAVE] {} peer(s) unbanned", removed.len());
            needs_update = true;
        }

        if needs_update {
            self.push_ban_list(&relaunch).await;
        }
    }

    /// Sends the full ban list to every downloader, then relaunches the
    /// torrents that downloader lost peers on. `relaunch` is indexed like
    /// `self.downloaders`.
    async fn push_ban_list(&self, relaunch: &[Vec<Torrent>])
    {
        let mut addresses = self.ban_list.addresses();
        addresses.sort();

        for (downloader, torrents) in self.downloaders.iter().zip(relaunch) {
            match downloader.login().await {
                Ok(true) => {}
                Ok(false) => {
                    Self::login_refused(downloader.as_ref());
                    return;
                }
                Err(error) => {
                    error!("[BAN WAVE] Login to {} ({}) failed: {}", downloader.name(), downloader.endpoint(), error);
                    downloader.set_last_status(DownloaderLastStatus::Error);
                    continue;
                }
            }

            if let Err(error) = downloader.set_ban_list(&addresses).await {
                error!("[BAN WAVE] Pushing {} banned peer(s) to {} failed: {}", addresses.len(), downloader.name(), error);
                downloader.set_last_status(DownloaderLastStatus::Error);
                continue;
            }
            if let Err(error) = downloader.relaunch_torrent_if_needed(torrents).await {
                error!("[BAN WAVE] Relaunching torrents on {} failed: {}", downloader.name(), error);
                downloader.set_last_status(DownloaderLastStatus::Error);
            }
        }
    }

    fn login_refused(downloader: &dyn Downloader)
    {
        error!("[BAN WAVE] Login to {} ({}) was refused, skipping the rest of this ban wave", downloader.name(), downloader.endpoint());
        downloader.set_last_status(DownloaderLastStatus::Error);
    }

    /// Runs a ban wave every `check_interval`, the first one immediately,
    /// until `shutdown` fires. Late ticks are delayed, never bunched up.
    pub async fn start_ban_wave_loop(self: Arc<Self>, shutdown: Shutdown)
    {
        let check_interval = self.config.check_interval();
        info!("[BOOT] Starting ban wave with {} ms interval...", check_interval.as_millis());

        let mut interval = tokio::time::interval(check_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.ban_wave().await;
                }
                _ = shutdown.handle() => {
                    info!("[BOOT] Shutting down ban wave...");
                    return;
                }
            }
        }
    }

    /// Stops every module and closes every downloader.
    pub async fn shutdown(&self)
    {
        self.module_manager.stop_all();
        for downloader in &self.downloaders {
            match downloader.close().await {
                Ok(_) => info!("[BOOT] Closed downloader {}", downloader.name()),
                Err(error) => warn!("[BOOT] Closing downloader {} failed: {}", downloader.name(), error)
            }
        }
    }
}

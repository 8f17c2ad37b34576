use async_trait::async_trait;
use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;
use crate::config::structs::progress_cheat_blocker_config::ProgressCheatBlockerConfig;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::progress_cheat_blocker::ProgressCheatBlocker;
use crate::module::structs::progress_recorder::ProgressRecorder;
use crate::module::traits::feature_module::FeatureModule;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl ProgressCheatBlocker {
    pub fn new(config: &ProgressCheatBlockerConfig) -> ProgressCheatBlocker
    {
        Self::with_recorder(config, ProgressRecorder::default())
    }

    pub fn with_recorder(config: &ProgressCheatBlockerConfig, progress_recorder: ProgressRecorder) -> ProgressCheatBlocker
    {
        ProgressCheatBlocker {
            config: config.clone(),
            progress_recorder,
        }
    }

    pub fn progress_recorder(&self) -> &ProgressRecorder
    {
        &self.progress_recorder
    }

    fn verdict(&self, action: PeerAction, reason: String) -> BanResult
    {
        BanResult::new(self.name(), action, reason)
    }

    pub fn check(&self, torrent: &Torrent, peer: &Peer) -> BanResult
    {
        let uploaded = peer.uploaded;
        if !torrent.has_known_size() {
            return self.verdict(PeerAction::NoAction, String::from("Unknown size torrent, skip"));
        }
        let torrent_size = torrent.size;
        if torrent_size < self.config.minimum_size {
            return self.verdict(PeerAction::NoAction, String::from("Skip small torrent"));
        }

        let actual_progress = uploaded as f64 / torrent_size as f64;
        let client_progress = peer.progress;

        if peer.tracks_uploaded() && self.config.block_excessive_clients && uploaded > torrent_size {
            let max_allowed_excessive = (torrent_size as f64 * self.config.excessive_threshold) as i64;
            if uploaded > max_allowed_excessive {
                return self.verdict(PeerAction::Ban, format!(
                    "Excessive upload: torrent size {torrent_size} bytes, uploaded {uploaded} bytes, allowed up to {max_allowed_excessive} bytes"
                ));
            }
        }

        if actual_progress - client_progress <= 0.0 {
            return self.verdict(PeerAction::NoAction, format!(
                "Peer reports {:.2}%, local accounting {:.2}%, skip",
                client_progress * 100.0, actual_progress * 100.0
            ));
        }

        let difference = (actual_progress - client_progress).abs();
        let incorrect_progress = format!(
            "Incorrect progress: peer reports {:.2}%, local accounting {:.2}%, difference {:.2}%",
            client_progress * 100.0, actual_progress * 100.0, difference * 100.0
        );
        if difference > self.config.maximum_difference {
            return self.verdict(PeerAction::Ban, incorrect_progress);
        }

        let rewind_allowed = self.config.rewind_maximum_difference;
        if rewind_allowed > 0.0 {
            let last_record = self.progress_recorder.record(peer.address.ip, &torrent.id, client_progress);
            let rewind = last_record - client_progress;
            let action = if rewind > rewind_allowed { PeerAction::Ban } else { PeerAction::NoAction };
            return self.verdict(action, format!(
                "Progress rewound: peer reports {:.2}%, local accounting {:.2}%, last seen {:.2}%, rewind {:.2}%, allowed {:.2}%",
                client_progress * 100.0, actual_progress * 100.0, last_record * 100.0, rewind * 100.0, rewind_allowed * 100.0
            ));
        }

        // Not a ban despite the message; kept as the long-standing behaviour.
        self.verdict(PeerAction::NoAction, incorrect_progress)
    }
}

#[async_trait]
impl FeatureModule for ProgressCheatBlocker {
    fn name(&self) -> &str
    {
        "Progress Cheat Blocker"
    }

    fn config_name(&self) -> &str
    {
        "progress_cheat_blocker"
    }

    fn is_module_enabled(&self) -> bool
    {
        self.config.enabled
    }

    fn stop(&self)
    {
        self.progress_recorder.clear();
    }

    async fn should_ban_peer(&self, torrent: &Torrent, peer: &Peer, _rule_executor: &WorkerPool) -> BanResult
    {
        self.check(torrent, peer)
    }
}

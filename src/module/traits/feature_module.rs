use async_trait::async_trait;
use crate::ban::structs::ban_result::BanResult;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

#[async_trait]
pub trait FeatureModule: Send + Sync {
    fn name(&self) -> &str;

    /// Key of the module's section under `[modules]`.
    fn config_name(&self) -> &str;

    fn is_module_enabled(&self) -> bool;

    fn register(&self) {}

    fn stop(&self) {}

    /// Called concurrently for many (torrent, peer) pairs. Work spawned on
    /// `rule_executor` must be finished or abandoned before returning.
    async fn should_ban_peer(&self, torrent: &Torrent, peer: &Peer, rule_executor: &WorkerPool) -> BanResult;
}

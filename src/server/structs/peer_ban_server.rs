use std::sync::Arc;
use crate::ban::structs::ban_list::BanList;
use crate::config::structs::configuration::Configuration;
use crate::downloader::traits::downloader::Downloader;
use crate::engine::structs::rule_engine::RuleEngine;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::module_manager::ModuleManager;
use crate::stats::traits::metrics::Metrics;

pub struct PeerBanServer {
    pub config: Arc<Configuration>,
    /// Processed in this order on every ban wave.
    pub downloaders: Vec<Arc<dyn Downloader>>,
    pub ban_list: Arc<BanList>,
    pub module_manager: Arc<ModuleManager>,
    pub rule_engine: Arc<RuleEngine>,
    /// One task per (torrent, peer) pair.
    pub general_pool: WorkerPool,
    /// One task per `get_peers` call.
    pub downloader_api_pool: WorkerPool,
    pub metrics: Arc<dyn Metrics>,
}

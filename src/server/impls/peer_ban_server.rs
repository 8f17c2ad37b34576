use std::sync::Arc;
use log::info;
use serde_json::{json, Value};
use crate::ban::structs::ban_list::BanList;
use crate::ban::structs::ban_metadata::BanMetadata;
use crate::ban::types::ahash_map::AHashMap;
use crate::config::structs::configuration::Configuration;
use crate::downloader::traits::downloader::Downloader;
use crate::engine::structs::rule_engine::RuleEngine;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::structs::module_manager::ModuleManager;
use crate::module::traits::feature_module::FeatureModule;
use crate::server::structs::peer_ban_server::PeerBanServer;
use crate::stats::traits::metrics::Metrics;
use crate::torrent::structs::peer_address::PeerAddress;

impl PeerBanServer {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(config: Arc<Configuration>, downloaders: Vec<Arc<dyn Downloader>>, metrics: Arc<dyn Metrics>, plugins: Vec<Arc<dyn FeatureModule>>) -> PeerBanServer
    {
        let threads = &config.threads;
        let ban_list = Arc::new(BanList::new(metrics.clone()));
        let module_manager = Arc::new(ModuleManager::load(&config, ban_list.clone(), plugins));
        let rule_engine = Arc::new(RuleEngine::new(
            module_manager.modules(),
            WorkerPool::new("check-ban", threads.check_ban_parallelism),
            Arc::new(WorkerPool::new("rule-execute", threads.rule_execute_parallelism)),
            config.rule_timeout()
        ));
        info!("[BOOT] {} module(s) registered, {} downloader(s) configured", module_manager.len(), downloaders.len());

        PeerBanServer {
            general_pool: WorkerPool::new("general", threads.general_parallelism),
            downloader_api_pool: WorkerPool::new("downloader-api", threads.downloader_api_parallelism),
            ban_list,
            config,
            downloaders,
            module_manager,
            rule_engine,
            metrics,
        }
    }

    /// Copy of the registry, detached from later bans and unbans.
    pub fn get_banned_peers(&self) -> AHashMap<PeerAddress, BanMetadata>
    {
        self.ban_list.snapshot()
    }

    /// The registry as a JSON array sorted by address, for an HTTP surface.
    pub fn get_banned_peers_json(&self) -> Value
    {
        let mut banned: Vec<(PeerAddress, BanMetadata)> = self.ban_list.snapshot().into_iter().collect();
        banned.sort_by_key(|(address, _)| *address);
        Value::Array(banned.into_iter().map(|(address, metadata)| json!({
            "address": address.to_string(),
            "metadata": metadata
        })).collect())
    }

    pub fn ban_peer(&self, address: PeerAddress, metadata: BanMetadata) -> Option<BanMetadata>
    {
        self.ban_list.ban(address, metadata)
    }

    pub fn unban_peer(&self, address: &PeerAddress) -> Option<BanMetadata>
    {
        self.ban_list.unban(address)
    }
}

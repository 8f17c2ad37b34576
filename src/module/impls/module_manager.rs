use std::sync::Arc;
use log::{debug, info};
use crate::ban::structs::ban_list::BanList;
use crate::config::structs::configuration::Configuration;
use crate::module::structs::active_probing::ActiveProbing;
use crate::module::structs::auto_range_ban::AutoRangeBan;
use crate::module::structs::client_name_blacklist::ClientNameBlacklist;
use crate::module::structs::ip_blacklist::IpBlacklist;
use crate::module::structs::module_manager::ModuleManager;
use crate::module::structs::peer_id_blacklist::PeerIdBlacklist;
use crate::module::structs::progress_cheat_blocker::ProgressCheatBlocker;
use crate::module::traits::feature_module::FeatureModule;

impl ModuleManager {
    /// `ban_list` is read by the range ban to find neighbouring entries.
    pub fn builtin_modules(config: &Configuration, ban_list: Arc<BanList>) -> Vec<Arc<dyn FeatureModule>>
    {
        let modules = &config.modules;
        let mut builtin: Vec<Arc<dyn FeatureModule>> = Vec::with_capacity(6);
        builtin.push(Arc::new(IpBlacklist::new(&modules.ip_blacklist)));
        builtin.push(Arc::new(PeerIdBlacklist::new(&modules.peer_id_blacklist)));
        builtin.push(Arc::new(ClientNameBlacklist::new(&modules.client_name_blacklist)));
        builtin.push(Arc::new(ProgressCheatBlocker::new(&modules.progress_cheat_blocker)));
        builtin.push(Arc::new(ActiveProbing::new(&modules.active_probing)));
        builtin.push(Arc::new(AutoRangeBan::new(&modules.auto_range_ban, ban_list)));
        builtin
    }

    /// Registers the enabled built-in modules followed by the enabled `plugins`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(config: &Configuration, ban_list: Arc<BanList>, plugins: Vec<Arc<dyn FeatureModule>>) -> ModuleManager
    {
        info!("[MODULES] Waiting for modules to start up...");
        let candidates = Self::builtin_modules(config, ban_list).into_iter().chain(plugins);
        ModuleManager::register_all(candidates)
    }

    pub fn register_all(candidates: impl IntoIterator<Item = Arc<dyn FeatureModule>>) -> ModuleManager
    {
        let mut modules: Vec<Arc<dyn FeatureModule>> = Vec::new();
        for module in candidates {
            if !module.is_module_enabled() {
                debug!("[MODULES] Module {} is disabled, skipping", module.name());
                continue;
            }
            module.register();
            info!("[MODULES] Registered module {} ({})", module.name(), module.config_name());
            modules.push(module);
        }
        ModuleManager { modules }
    }

    pub fn modules(&self) -> Vec<Arc<dyn FeatureModule>>
    {
        self.modules.clone()
    }

    pub fn len(&self) -> usize
    {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.modules.is_empty()
    }

    pub fn stop_all(&self)
    {
        for module in &self.modules {
            module.stop();
            info!("[MODULES] Stopped module {}", module.name());
        }
    }
}

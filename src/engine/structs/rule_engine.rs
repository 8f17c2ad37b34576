use std::sync::Arc;
use std::time::Duration;
use crate::engine::structs::worker_pool::WorkerPool;
use crate::module::traits::feature_module::FeatureModule;

pub struct RuleEngine {
    pub(crate) modules: Vec<Arc<dyn FeatureModule>>,
    /// Runs one task per module per peer.
    pub(crate) check_ban_pool: WorkerPool,
    /// Handed to modules for their own parallel work.
    pub(crate) rule_execute_pool: Arc<WorkerPool>,
    pub(crate) timeout: Option<Duration>,
}

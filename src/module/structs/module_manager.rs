use std::sync::Arc;
use crate::module::traits::feature_module::FeatureModule;

pub struct ModuleManager {
    pub(crate) modules: Vec<Arc<dyn FeatureModule>>,
}

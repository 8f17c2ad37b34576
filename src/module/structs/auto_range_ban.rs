use std::sync::Arc;
use crate::ban::structs::ban_list::BanList;
use crate::config::structs::auto_range_ban_config::AutoRangeBanConfig;

pub struct AutoRangeBan {
    pub(crate) config: AutoRangeBanConfig,
    pub(crate) ban_list: Arc<BanList>,
}

pub mod module_manager;
pub mod progress_cheat_blocker;
pub mod progress_recorder;
pub mod ip_blacklist;
pub mod peer_id_blacklist;
pub mod client_name_blacklist;
pub mod auto_range_ban;
pub mod active_probing;

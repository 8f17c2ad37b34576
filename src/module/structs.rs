/// Registered modules and their lifecycle.
pub mod module_manager;

/// Claimed-progress versus uploaded-bytes checker.
pub mod progress_cheat_blocker;

/// Per-IP record of the last progress seen for each torrent.
pub mod progress_recorder;

/// One recorded (torrent, progress) pair.
pub mod client_task;

/// Static IP address blacklist.
pub mod ip_blacklist;

/// Peer id prefix blacklist.
pub mod peer_id_blacklist;

/// Client name blacklist.
pub mod client_name_blacklist;

/// Bans peers next to an already banned address.
pub mod auto_range_ban;

/// Bans peers exposing configured TCP ports.
pub mod active_probing;

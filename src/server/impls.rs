/// Construction and registry access.
pub mod peer_ban_server;

/// Per-downloader peer checks.
pub mod peer_ban_server_downloader;

/// Scheduled ban wave, push-back and shutdown.
pub mod peer_ban_server_ban_wave;

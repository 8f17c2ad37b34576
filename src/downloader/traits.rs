/// Remote BitTorrent client API used by the ban wave.
pub mod downloader;

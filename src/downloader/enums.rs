/// Health of a downloader as seen by the last ban wave.
pub mod downloader_last_status;

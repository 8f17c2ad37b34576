use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloaderLastStatus {
    #[default]
    Healthy,
    Error,
}

impl fmt::Display for DownloaderLastStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloaderLastStatus::Healthy => write!(f, "healthy"),
            DownloaderLastStatus::Error => write!(f, "error"),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone)]
pub struct Torrent {
    pub id: String,
    pub name: String,
    pub hash: String,
    /// Total size in bytes, 0 or less when the client does not know it yet.
    pub size: i64,
}

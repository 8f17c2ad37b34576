use serde::Serialize;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

/// Immutable once built; `unban_at` is always after `ban_at`.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct BanMetadata {
    pub(crate) context: String,
    pub(crate) ban_at: i64,
    pub(crate) unban_at: i64,
    pub(crate) torrent: Torrent,
    pub(crate) peer: Peer,
    pub(crate) description: String,
}

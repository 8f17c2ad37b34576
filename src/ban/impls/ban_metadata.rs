use crate::ban::structs::ban_metadata::BanMetadata;
use crate::common::structs::custom_error::CustomError;
use crate::torrent::structs::peer::Peer;
use crate::torrent::structs::torrent::Torrent;

impl BanMetadata {
    pub fn new(context: &str, ban_at: i64, unban_at: i64, torrent: Torrent, peer: Peer, description: &str) -> Result<BanMetadata, CustomError>
    {
        if unban_at <= ban_at {
            return Err(CustomError::new(&format!("unban_at ({unban_at}) must be after ban_at ({ban_at})")));
        }
        Ok(BanMetadata {
            context: context.to_string(),
            ban_at,
            unban_at,
            torrent,
            peer,
            description: description.to_string(),
        })
    }

    /// Ban starting at `ban_at` for `duration` milliseconds (at least one).
    pub fn for_duration(context: &str, ban_at: i64, duration: u64, torrent: Torrent, peer: Peer, description: &str) -> BanMetadata
    {
        let duration = i64::try_from(duration).unwrap_or(i64::MAX).max(1);
        BanMetadata {
            context: context.to_string(),
            ban_at,
            unban_at: ban_at.saturating_add(duration),
            torrent,
            peer,
            description: description.to_string(),
        }
    }

    pub fn context(&self) -> &str { &self.context }

    pub fn ban_at(&self) -> i64 { self.ban_at }

    pub fn unban_at(&self) -> i64 { self.unban_at }

    pub fn torrent(&self) -> &Torrent { &self.torrent }

    pub fn peer(&self) -> &Peer { &self.peer }

    pub fn description(&self) -> &str { &self.description }

    #[inline]
    pub fn is_expired(&self, now: i64) -> bool
    {
        now >= self.unban_at
    }
}

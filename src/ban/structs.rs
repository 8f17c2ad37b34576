/// Registry of banned peers.
pub mod ban_list;

/// Ban bookkeeping stored per banned address.
pub mod ban_metadata;

/// Verdict of one rule module for one peer.
pub mod ban_result;

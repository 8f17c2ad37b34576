//! Ban registry and rule verdicts.
//!
//! The ban registry is the one structure every peer-check task may write to
//! at the same time; it is a lock-protected map owned by `BanList`, so callers
//! never take a lock themselves. Entries expire only when the scheduler sweeps
//! them.
//!
//! # Main Components
//!
//! - `BanList` - concurrent `PeerAddress -> BanMetadata` registry
//! - `BanMetadata` - why, when and until when a peer is banned
//! - `BanResult` - the verdict of one rule module
//! - `PeerAction` - `NoAction`, `Skip` or `Ban`
//!
//! # Example
//!
//! ```rust,ignore
//! let ban_list = BanList::new(metrics);
//! ban_list.ban(address, metadata);
//! let removed = ban_list.sweep_expired(current_time_millis());
//! ```

/// Verdict actions.
pub mod enums;

/// Implementation blocks for the registry and verdict types.
pub mod impls;

/// Data structures for the registry and verdicts.
pub mod structs;

/// Collection type aliases.
pub mod types;

//! Rule modules.
//!
//! Every rule is a `FeatureModule`: it is built from the configuration, kept
//! only when enabled, `register()`-ed once, asked `should_ban_peer` for every
//! (torrent, peer) pair of every ban wave and `stop()`-ed on shutdown.
//! Modules linked in by an embedding application go through exactly the same
//! path as the built-in ones.
//!
//! # Built-in modules
//!
//! - `ProgressCheatBlocker` - compares claimed progress with local upload accounting
//! - `IpBlacklist` - static list of banned IP addresses
//! - `PeerIdBlacklist` - banned peer id prefixes
//! - `ClientNameBlacklist` - banned client name fragments
//! - `ActiveProbing` - connects back to the peer and bans when a configured TCP port is open
//! - `AutoRangeBan` - bans peers in the same IPv4 /24 or IPv6 /64 as a registry entry

/// Data structures for the built-in modules and the module manager.
pub mod structs;

/// Implementation blocks for the built-in modules and the module manager.
pub mod impls;

/// The rule module contract.
pub mod traits;

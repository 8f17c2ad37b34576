/// `HashMap` with the aHash hasher.
pub mod ahash_map;

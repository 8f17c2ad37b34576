pub struct PeerIdBlacklist {
    pub(crate) enabled: bool,
    /// Stored lowercase.
    pub(crate) prefixes: Vec<String>,
}

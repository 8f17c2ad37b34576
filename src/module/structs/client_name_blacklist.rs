pub struct ClientNameBlacklist {
    pub(crate) enabled: bool,
    /// Stored lowercase.
    pub(crate) contains: Vec<String>,
}

use crate::torrent::structs::torrent::Torrent;

impl Torrent {
    pub fn new(id: &str, name: &str, hash: &str, size: i64) -> Torrent
    {
        Torrent {
            id: id.to_string(),
            name: name.to_string(),
            hash: hash.to_string(),
            size,
        }
    }

    #[inline]
    pub fn has_known_size(&self) -> bool
    {
        self.size > 0
    }
}

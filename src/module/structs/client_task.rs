#[derive(PartialEq, Debug, Clone)]
pub struct ClientTask {
    pub torrent_id: String,
    pub progress: f64,
}

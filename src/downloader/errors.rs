use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloaderError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Task error: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for DownloaderError {
    fn from(error: tokio::task::JoinError) -> Self {
        DownloaderError::Task(error.to_string())
    }
}

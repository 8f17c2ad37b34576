use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug)]
pub struct WorkerPool {
    pub(crate) name: String,
    pub(crate) parallelism: usize,
    pub(crate) semaphore: Arc<Semaphore>,
}

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use crate::engine::structs::worker_pool::WorkerPool;

impl WorkerPool {
    pub fn new(name: &str, parallelism: usize) -> WorkerPool
    {
        let parallelism = parallelism.max(1);
        WorkerPool {
            name: name.to_string(),
            parallelism,
            semaphore: Arc::new(Semaphore::new(parallelism)),
        }
    }

    /// Spawns `future` on the runtime; it starts running once one of the
    /// pool's permits is free and holds that permit until it completes.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let semaphore = self.semaphore.clone();
        tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            future.await
        })
    }

    pub fn name(&self) -> &str
    {
        &self.name
    }

    pub fn parallelism(&self) -> usize
    {
        self.parallelism
    }

    pub fn available_permits(&self) -> usize
    {
        self.semaphore.available_permits()
    }
}

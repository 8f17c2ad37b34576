/// Concurrency-bounded task spawner.
pub mod worker_pool;

/// Module dispatch and verdict resolution.
pub mod rule_engine;

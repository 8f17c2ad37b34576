pub mod worker_pool;
pub mod rule_engine;

use std::sync::Arc;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct StatsMetrics {
    pub stats: Arc<StatsAtomics>,
}

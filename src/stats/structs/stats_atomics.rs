use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_check: AtomicI64,
    pub checks: AtomicI64,
    pub bans: AtomicI64,
    pub unbans: AtomicI64,
}

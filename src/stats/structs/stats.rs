use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_check: i64,
    pub checks: i64,
    pub bans: i64,
    pub unbans: i64,
}

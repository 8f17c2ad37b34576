use serde::{Deserialize, Serialize};
use crate::ban::enums::peer_action::PeerAction;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct BanResult {
    /// Name of the module that produced the verdict, `None` for the engine fallback.
    pub module: Option<String>,
    pub action: PeerAction,
    pub reason: String,
}

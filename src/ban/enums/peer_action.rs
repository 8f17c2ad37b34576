use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum PeerAction {
    #[default]
    NoAction,
    /// Stop evaluating this peer without banning it.
    Skip,
    Ban,
}

use crate::ban::enums::peer_action::PeerAction;
use crate::ban::structs::ban_result::BanResult;

impl BanResult {
    pub fn new(module: &str, action: PeerAction, reason: String) -> BanResult
    {
        BanResult {
            module: Some(module.to_string()),
            action,
            reason,
        }
    }

    /// Engine fallback when no module returned a decisive verdict.
    pub fn no_matches() -> BanResult
    {
        BanResult {
            module: None,
            action: PeerAction::NoAction,
            reason: String::from("No matches"),
        }
    }

    /// `Skip` and `Ban` both end the scan over collected verdicts.
    #[inline]
    pub fn is_decisive(&self) -> bool
    {
        matches!(self.action, PeerAction::Skip | PeerAction::Ban)
    }

    pub fn module_name(&self) -> &str
    {
        self.module.as_deref().unwrap_or("unknown")
    }
}

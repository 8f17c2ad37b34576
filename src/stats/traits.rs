/// Receiver of check, ban and unban events.
pub mod metrics;

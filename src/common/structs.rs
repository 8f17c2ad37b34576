/// Simple message-carrying error type.
pub mod custom_error;

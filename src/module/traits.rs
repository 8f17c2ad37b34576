/// Capability every rule module implements.
pub mod feature_module;

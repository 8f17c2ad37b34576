//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the engine configuration
//! from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **root**: log level, console interval, check interval and ban duration
//! - **threads**: widths of the four worker pools and the optional rule timeout
//! - **modules**: one section per built-in rule module
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_ban_wave::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating it when asked to
//! let config = Configuration::load_from_file(false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;

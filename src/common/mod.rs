//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the ban engine.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp utilities
//!
//! # Data Structures
//!
//! - `CustomError` - Custom error type
//!
//! # Example
//!
//! ```rust,ignore
//! use peer_ban_wave::common::common::{current_time_millis, setup_logging};
//!
//! setup_logging(&config);
//! let now = current_time_millis();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

//! Rule evaluation.
//!
//! `RuleEngine` hands one peer to every registered rule module at once and
//! folds their verdicts into a single decision. All fan-out in the engine
//! goes through `WorkerPool`s: tokio tasks gated by a semaphore of the
//! configured width, one pool per kind of work so a stalled stage never
//! starves another.
//!
//! # Verdict resolution
//!
//! Verdicts are collected in completion order. The first `Skip` or `Ban`
//! wins; when every module answers `NoAction` the result is "No matches".

/// Data structures for the engine and its pools.
pub mod structs;

/// Implementation blocks for the engine and its pools.
pub mod impls;

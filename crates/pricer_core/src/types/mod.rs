//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for solver operations
//!
//! # Re-exports
//!
//! - [`SolverError`] from `error`

pub mod error;

pub use error::SolverError;

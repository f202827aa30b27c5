//! # TableKit Core
//!
//! Core types, constants, and error handling for TableKit.
//! Provides the fundamental definitions shared by the layout engine
//! crates: dimension bounds, layout defaults, and the error types
//! surfaced by the plan-file layer.

pub mod constants;
pub mod error;

pub use error::{Error, Result};

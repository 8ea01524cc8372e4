//! Stateless helper functions shared across Toolbelt consumers.
//!
//! Every function is a pure, single-attempt operation over the values it is
//! given: no I/O, no global state, nothing to configure beyond per-call
//! arguments. The async delay in [`time::delay`] is the only suspension
//! point.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, tree traversal, template formatting, numbers,
//!   date patterns
//! - `observability`: `tracing` events from the foundation helpers
//! - `runtime`: async delay helpers on the tokio timer

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod number;
#[cfg(feature = "foundation")]
pub mod text;
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod tree;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "foundation")]
pub use text::{format, format_named, format_percent, FormatArg, TextError};
#[cfg(feature = "foundation")]
pub use tree::{for_each, for_each_value, TreeNode};

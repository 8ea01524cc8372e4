//! Text utilities
//!
//! This module provides template helpers including:
//! - **[`format`]**: `{}`, printf-style `%x`, and `{name}` substitution
//! - **[`args`]**: the typed [`FormatArg`] values templates consume
//! - **[`placeholders`]**: discovery of placeholder names in a template
//! - **[`error`]**: [`TextError`] and its classification
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use toolbelt_common::fmt_args;
//! use toolbelt_common::text::{format, format_percent};
//!
//! assert_eq!(format("{} of {}", &fmt_args![3, 10]), "3 of 10");
//! assert_eq!(format_percent("%s is %X", &fmt_args!["mask", 4095]).unwrap(), "mask is 0xFFF");
//! # }
//! ```

pub mod args;
pub mod error;
pub mod format;
pub mod placeholders;

pub use args::FormatArg;
pub use error::{TextError, TextResult};
pub use format::{format, format_named, format_named_json, format_percent, MIN_TEMPLATE_LEN};
pub use placeholders::{
    placeholders, placeholders_matching, placeholders_with, unique_placeholders,
    DEFAULT_PLACEHOLDER_PATTERN,
};

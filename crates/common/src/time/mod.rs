//! Date and time utilities
//!
//! This module provides:
//! - **[`pattern`]**: tokenizer for `yyyy-MM-dd`-style date patterns
//! - **[`date`]**: formatting and parsing with those patterns
//! - **[`delay`]**: async sleep helpers (requires the `runtime` feature)
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use chrono::{TimeZone, Utc};
//! use toolbelt_common::time::{format_date, parse_date};
//!
//! let at = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
//! let text = format_date(&at, "dd.MM.yyyy HH:mm");
//! assert_eq!(text, "09.03.2024 08:00");
//! assert_eq!(parse_date(&text, "dd.MM.yyyy HH:mm"), Some(at.naive_utc()));
//! # }
//! ```

pub mod date;
#[cfg(feature = "runtime")]
pub mod delay;
pub mod pattern;

// Re-export commonly used items
pub use date::{format_date, format_date_default, format_naive, parse_date, DEFAULT_DATE_PATTERN};
#[cfg(feature = "runtime")]
pub use delay::{sleep, sleep_ms};
pub use pattern::{tokenize, DateToken, PatternPiece};

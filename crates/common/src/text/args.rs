//! Typed substitution values for the template formatters.
//!
//! [`FormatArg`] is the closed set of value kinds a template can receive.
//! Each formatter decides per variant how to render it, so there is no
//! runtime type probing at substitution time.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single substitution value.
///
/// With the `serde` feature the enum (de)serializes untagged, so a JSON
/// array such as `[1, "a", null]` reads directly into `Vec<FormatArg>`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FormatArg {
    /// Absent value; renders as the empty string.
    #[default]
    Nil,
    /// Boolean
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point
    Float(f64),
    /// Text
    Str(String),
    /// Structured data (objects and arrays)
    Json(Value),
}

impl FormatArg {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Json(Value::Object(_)) => "object",
            Self::Json(Value::Array(_)) => "array",
            Self::Json(_) => "json",
        }
    }

    /// Returns `true` for [`FormatArg::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::Json(Value::Null) => Ok(()),
            Self::Json(Value::String(s)) => f.write_str(s),
            Self::Json(other) => write!(f, "{other}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(impl From<$ty> for FormatArg {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FormatArg {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<isize> for FormatArg {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for FormatArg {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

/// JSON scalars map onto the matching scalar variant; only objects and
/// arrays stay [`FormatArg::Json`].
impl From<Value> for FormatArg {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => n.as_f64().map_or(Self::Nil, Self::Float),
            },
            Value::String(s) => Self::Str(s),
            structured => Self::Json(structured),
        }
    }
}

impl From<&Value> for FormatArg {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

/// Build a `Vec<FormatArg>` from heterogeneous values.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::fmt_args;
/// use toolbelt_common::text::{format, FormatArg};
///
/// let args = fmt_args!["disk", 93, None::<i32>];
/// assert_eq!(args[2], FormatArg::Nil);
/// assert_eq!(format("{} at {}%{}", &args), "disk at 93%");
/// # }
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        ::std::vec::Vec::<$crate::text::FormatArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::text::FormatArg::from($arg)),+]
    };
}

//! Placeholder substitution in template strings.
//!
//! Three token shapes are supported:
//! - **`{}`**: positional, [`format`]
//! - **`%b %c %d %f %j %o %s %x %X`**: positional with per-specifier
//!   rendering, [`format_percent`]
//! - **`{name}`**: named, [`format_named`] and [`format_named_json`]
//!
//! All modes scan the template once, left to right. Positional modes consume
//! one parameter per matched token and stop when either tokens or parameters
//! run out; surplus parameters are ignored and surplus tokens stay literal.
//!
//! Templates shorter than [`MIN_TEMPLATE_LEN`] characters are returned
//! untouched by both positional modes, even if they contain a token.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::hash::{BuildHasher, Hash};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
#[cfg(feature = "observability")]
use tracing::debug;

use super::args::FormatArg;
use super::error::{TextError, TextResult};
use crate::error::CommonError;
use crate::number::{parse_float, parse_int};

/// Positional modes skip templates with fewer characters than this.
pub const MIN_TEMPLATE_LEN: usize = 3;

static PERCENT_SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%[bcdfjosxX]").expect("PERCENT_SPECIFIER pattern is valid and well-formed")
});

fn is_short_circuit(template: &str, params: &[FormatArg]) -> bool {
    params.is_empty() || template.chars().count() < MIN_TEMPLATE_LEN
}

/// Replace each `{}` in `template`, in order, with the next parameter.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::fmt_args;
/// use toolbelt_common::text::format;
///
/// assert_eq!(format("a{}b{}c", &fmt_args!["X", "Y"]), "aXbYc");
/// assert_eq!(format("{}{}", &fmt_args!["only-one"]), "only-one{}");
/// assert_eq!(format("{}", &fmt_args!["too short"]), "{}");
/// # }
/// ```
pub fn format(template: &str, params: &[FormatArg]) -> String {
    if is_short_circuit(template, params) {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut params = params.iter();

    while let Some(pos) = rest.find("{}") {
        let Some(param) = params.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        // Writing into a String cannot fail.
        let _ = write!(out, "{param}");
        rest = &rest[pos + 2..];
    }

    out.push_str(rest);
    out
}

/// Replace printf-style specifiers with rendered parameters.
///
/// | Specifier | Rendering |
/// |-----------|-----------|
/// | `%d` | decimal integer |
/// | `%b` | binary |
/// | `%o` | octal with a leading `0` |
/// | `%x` / `%X` | hexadecimal with a `0x` prefix, lower / upper case digits |
/// | `%c` | character for the integer code point |
/// | `%f` | floating point |
/// | `%j` | compact JSON of a plain data object; nil renders empty |
/// | `%s` | plain text; nil renders empty |
///
/// Only the first `min(specifiers, params)` specifiers are substituted.
/// Any other `%` sequence is copied through and does not consume a
/// parameter.
///
/// # Errors
///
/// Returns [`TextError::TypeMismatch`] when a parameter cannot be coerced
/// to the kind its specifier expects, [`TextError::InvalidCharCode`] for a
/// `%c` value outside the Unicode scalar range, and
/// [`TextError::NotPlainData`] when `%j` receives a non-object, non-nil
/// value.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::fmt_args;
/// use toolbelt_common::text::format_percent;
///
/// assert_eq!(format_percent("%d items", &fmt_args![5]).unwrap(), "5 items");
/// assert_eq!(format_percent("%x", &fmt_args![255]).unwrap(), "0xff");
/// assert_eq!(format_percent("%s-%s", &fmt_args!["a", "b"]).unwrap(), "a-b");
/// assert!(format_percent("%d items", &fmt_args!["many"]).is_err());
/// # }
/// ```
pub fn format_percent(template: &str, params: &[FormatArg]) -> TextResult<String> {
    if is_short_circuit(template, params) {
        return Ok(template.to_owned());
    }

    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for (token, param) in PERCENT_SPECIFIER.find_iter(template).zip(params) {
        out.push_str(&template[last..token.start()]);
        // The pattern guarantees a single ASCII specifier after '%'.
        let specifier = char::from(template.as_bytes()[token.end() - 1]);
        let rendered = render_specifier(specifier, param);
        #[cfg(feature = "observability")]
        if let Err(err) = &rendered {
            debug!(%specifier, kind = param.kind(), error = %err, "percent format failed");
        }
        out.push_str(&rendered?);
        last = token.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

fn render_specifier(specifier: char, param: &FormatArg) -> TextResult<String> {
    let rendered = match specifier {
        'd' => coerce_int(specifier, param)?.to_string(),
        'b' => with_radix_prefix(coerce_int(specifier, param)?, "", |n| format!("{n:b}")),
        'o' => with_radix_prefix(coerce_int(specifier, param)?, "0", |n| format!("{n:o}")),
        'x' => with_radix_prefix(coerce_int(specifier, param)?, "0x", |n| format!("{n:x}")),
        'X' => with_radix_prefix(coerce_int(specifier, param)?, "0x", |n| format!("{n:X}")),
        'c' => {
            let code = coerce_int(specifier, param)?;
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or(TextError::InvalidCharCode(code))?
                .to_string()
        }
        'f' => FormatArg::Float(coerce_float(specifier, param)?).to_string(),
        'j' => match param {
            FormatArg::Nil => String::new(),
            FormatArg::Json(object @ Value::Object(_)) => {
                serde_json::to_string(object).map_err(CommonError::from)?
            }
            other => return Err(TextError::NotPlainData(other.kind())),
        },
        's' => param.to_string(),
        other => {
            return Err(CommonError::internal_with_context(
                format!("unhandled specifier %{other}"),
                "format_percent",
            )
            .into())
        }
    };
    Ok(rendered)
}

/// Render `|n|` in some radix and put the sign in front of the prefix.
fn with_radix_prefix(n: i64, prefix: &str, digits: impl Fn(u64) -> String) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{prefix}{}", digits(n.unsigned_abs()))
}

fn mismatch(specifier: char, expected: &'static str, param: &FormatArg) -> TextError {
    TextError::TypeMismatch {
        specifier,
        expected,
        kind: param.kind(),
        value: param.to_string(),
    }
}

fn coerce_int(specifier: char, param: &FormatArg) -> TextResult<i64> {
    let coerced = match param {
        FormatArg::Int(i) => Some(*i),
        FormatArg::Float(x) => truncate_to_i64(*x),
        FormatArg::Str(s) => parse_int(s).or_else(|| parse_float(s).and_then(truncate_to_i64)),
        _ => None,
    };
    coerced.ok_or_else(|| mismatch(specifier, "an integer", param))
}

/// Truncate toward zero, or `None` when the result does not fit in `i64`.
fn truncate_to_i64(x: f64) -> Option<i64> {
    // 2^63 is exact in f64; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let truncated = x.trunc();
    (truncated.is_finite() && (-LIMIT..LIMIT).contains(&truncated)).then_some(truncated as i64)
}

fn coerce_float(specifier: char, param: &FormatArg) -> TextResult<f64> {
    match param {
        FormatArg::Float(x) => Ok(*x),
        FormatArg::Int(i) => Ok(*i as f64),
        FormatArg::Str(s) => parse_float(s).ok_or_else(|| mismatch(specifier, "a number", param)),
        _ => Err(mismatch(specifier, "a number", param)),
    }
}

/// Replace every `{key}` with the matching value from `named`.
///
/// Placeholders whose name is not a key of `named` are left as-is. The
/// template is scanned once, so substituted values are never re-scanned for
/// further placeholders.
///
/// A placeholder name ends at the first `}` after its `{`, so keys that
/// contain `}` never match and their placeholders stay literal.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use std::collections::HashMap;
///
/// use toolbelt_common::text::{format_named, FormatArg};
///
/// let mut named = HashMap::new();
/// named.insert("name", FormatArg::from("world"));
///
/// assert_eq!(format_named("hi {name}", &named), "hi world");
/// assert_eq!(format_named("hi {missing}", &named), "hi {missing}");
/// # }
/// ```
pub fn format_named<K, S>(template: &str, named: &HashMap<K, FormatArg, S>) -> String
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    if named.is_empty() {
        return template.to_owned();
    }
    substitute_named(template, |name| named.get(name).map(ToString::to_string))
}

/// Named substitution with the mapping taken from a JSON object.
///
/// A `values` that is not an object leaves the template unchanged. JSON
/// values are rendered the same way as [`FormatArg`]: `null` is empty and
/// strings are unquoted.
pub fn format_named_json(template: &str, values: &Value) -> String {
    match values.as_object() {
        Some(map) if !map.is_empty() => substitute_named(template, |name| {
            map.get(name).map(|value| FormatArg::from(value).to_string())
        }),
        _ => template.to_owned(),
    }
}

fn substitute_named<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let replacement = after_open
            .find('}')
            .and_then(|close| lookup(&after_open[..close]).map(|value| (close, value)));

        match replacement {
            Some((close, value)) => {
                out.push_str(&value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}

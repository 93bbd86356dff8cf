//! Failure message formatting
//!
//! The default engine knows two placeholders:
//!
//! - `{i}` is replaced with the `i`-th positional parameter. Out-of-range
//!   indexes are left as written.
//! - `{{VALUE}}` is replaced with the validated value.
//!
//! Parameters are substituted first, the value marker second, so a value
//! that looks like `{0}` is never expanded. A register with a custom
//! formatter bypasses the engine entirely.
//!
//! # Examples
//!
//! ```rust
//! use verdict_validator::foundation::ValidatorRegister;
//! use verdict_validator::format::format_message;
//! use serde_json::json;
//!
//! let register = ValidatorRegister::new("range")
//!     .message("Must be between {0} and {1}, got {{VALUE}}");
//!
//! let message = format_message(&register, &json!(5), &[json!(1), json!(10)], None);
//! assert_eq!(message, "Must be between 1 and 10, got 5");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::foundation::MessageSource;

/// Marker replaced with the validated value.
pub const VALUE_MARKER: &str = "{{VALUE}}";

static PARAM_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Formats a failure message for `source`.
///
/// The template is `message` when it is non-empty, otherwise the source's
/// default message. With a custom formatter the template is handed over
/// as-is; without one, a missing template yields an empty string.
pub fn format_message<S>(source: &S, value: &Value, params: &[Value], message: Option<&str>) -> String
where
    S: MessageSource + ?Sized,
{
    let template = message
        .filter(|message| !message.is_empty())
        .or_else(|| source.message());

    if let Some(format) = source.formatter() {
        return format(value, params, template);
    }

    match template {
        Some(template) => render_template(template, value, params),
        None => String::new(),
    }
}

/// Applies the default substitution rules to `template`.
#[must_use]
pub fn render_template(template: &str, value: &Value, params: &[Value]) -> String {
    let substituted = PARAM_PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|index| params.get(index))
            .map_or_else(|| caps[0].to_owned(), |param| display_value(param).into_owned())
    });

    substituted.replace(VALUE_MARKER, &display_value(value))
}

/// Display form of a dynamic value.
///
/// Strings render without quotes, everything else as compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

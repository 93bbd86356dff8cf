//! What a raw validator returns
//!
//! Validators report through an explicit tagged union instead of a
//! dynamically typed return value. The adapter branches on the variant.

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::error::BoxError;

// ============================================================================
// VERDICT
// ============================================================================

/// Result of running a raw validator.
///
/// # Examples
///
/// ```rust
/// use verdict_validator::foundation::Verdict;
/// use serde_json::json;
///
/// assert!(matches!(Verdict::from(true), Verdict::Pass));
/// assert!(matches!(Verdict::from("custom message"), Verdict::Message(_)));
/// assert!(matches!(Verdict::from(json!(42)), Verdict::Unsupported(_)));
/// ```
pub enum Verdict {
    /// The value passed.
    Pass,

    /// The value failed; the default message applies.
    Fail,

    /// The value failed; the string overrides the default message template.
    Message(String),

    /// The outcome settles later. `Ok(())` passes, `Err(e)` fails with
    /// `e`'s text as the override message.
    Deferred(BoxFuture<'static, Result<(), BoxError>>),

    /// The validator produced something other than a boolean, a string or a
    /// deferred outcome. Carries a description of what it produced.
    Unsupported(String),
}

impl Verdict {
    /// Wraps a future into a deferred verdict.
    ///
    /// ```rust
    /// use verdict_validator::foundation::Verdict;
    ///
    /// let verdict = Verdict::deferred(async { Err::<(), _>("taken") });
    /// assert_eq!(verdict.kind(), "deferred");
    /// ```
    pub fn deferred<F, E>(future: F) -> Self
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::Deferred(future.map(|result| result.map_err(Into::into)).boxed())
    }

    /// Fails with an override message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Marks the return value as outside the validator contract.
    pub fn unsupported(found: impl Into<String>) -> Self {
        Self::Unsupported(found.into())
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Message(_) => "message",
            Self::Deferred(_) => "deferred",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

impl fmt::Debug for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("Pass"),
            Self::Fail => f.write_str("Fail"),
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Unsupported(found) => f.debug_tuple("Unsupported").field(found).finish(),
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

/// Dynamic values map by JSON type: booleans pass or fail, strings become
/// override messages, everything else is outside the contract.
impl From<Value> for Verdict {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(passed) => passed.into(),
            Value::String(message) => Self::Message(message),
            other => Self::Unsupported(json_type_name(&other).to_owned()),
        }
    }
}

/// JSON type name of a value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// INTO VERDICT
// ============================================================================

/// Anything a validator closure may return.
///
/// Plain shapes (`bool`, strings, [`Verdict`], JSON values) never raise.
/// `Result<T, E>` lets a validator raise with `?`; the error text replaces
/// the failure message.
pub trait IntoVerdict {
    /// Converts into a verdict, or the error the validator raised.
    fn into_verdict(self) -> Result<Verdict, BoxError>;
}

impl IntoVerdict for Verdict {
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        Ok(self)
    }
}

impl IntoVerdict for bool {
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        Ok(self.into())
    }
}

impl IntoVerdict for String {
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        Ok(self.into())
    }
}

impl IntoVerdict for &str {
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        Ok(self.into())
    }
}

impl IntoVerdict for Value {
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        Ok(self.into())
    }
}

impl<T, E> IntoVerdict for Result<T, E>
where
    T: Into<Verdict>,
    E: Into<BoxError>,
{
    fn into_verdict(self) -> Result<Verdict, BoxError> {
        self.map(Into::into).map_err(Into::into)
    }
}

// ============================================================================
// TESTS
// ============================================================================

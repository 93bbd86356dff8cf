//! Validator registration records
//!
//! A [`ValidatorRegister`] is what callers hand to the registry: a name, a
//! raw validator and optional message metadata. The registry stores a
//! [`ValidatorInfo`], the same metadata with the raw validator replaced by
//! its adapted, uniformly async form.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;

use super::error::{BoxError, ValidateError};
use super::verdict::{IntoVerdict, Verdict};

/// Type-erased raw validator.
pub type ValidatorFn = Arc<dyn Fn(&Value, &[Value]) -> Result<Verdict, BoxError> + Send + Sync>;

/// Custom message formatter: `(value, params, template) -> message`.
pub type FormatFn = Arc<dyn Fn(&Value, &[Value], Option<&str>) -> String + Send + Sync>;

/// Adapted validator: `(value, params) -> deferred pass / failure`.
pub type AdaptedFn =
    Arc<dyn Fn(Value, Vec<Value>) -> BoxFuture<'static, Result<(), ValidateError>> + Send + Sync>;

// ============================================================================
// MESSAGE SOURCE
// ============================================================================

/// Message metadata consulted by the formatter.
pub trait MessageSource {
    /// Default message template.
    fn message(&self) -> Option<&str>;

    /// Custom formatter, if any.
    fn formatter(&self) -> Option<&FormatFn>;
}

// ============================================================================
// VALIDATOR REGISTER
// ============================================================================

/// Registration record for a validator.
///
/// # Examples
///
/// ```rust
/// use verdict_validator::foundation::ValidatorRegister;
///
/// let register = ValidatorRegister::new("range")
///     .method(|value, params| {
///         let n = value.as_f64().unwrap_or(f64::NAN);
///         let (min, max) = (params[0].as_f64().unwrap_or(0.0), params[1].as_f64().unwrap_or(0.0));
///         n >= min && n <= max
///     })
///     .message("Must be between {0} and {1}, got {{VALUE}}");
///
/// assert_eq!(register.name, "range");
/// ```
#[derive(Clone, Default)]
pub struct ValidatorRegister {
    /// Registry key.
    pub name: String,

    /// Raw validator. A register without one is accepted, but invoking it
    /// is a contract violation.
    pub method: Option<ValidatorFn>,

    /// Consumer-defined flag, passed through untouched.
    pub dynamic: bool,

    /// Default message template.
    pub message: Option<String>,

    /// Custom formatter overriding the default template engine.
    pub format: Option<FormatFn>,
}

impl ValidatorRegister {
    /// Creates a register with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the raw validator.
    ///
    /// The closure may return a `bool`, a string (always a failure, used as
    /// the message), a [`Verdict`], a JSON value, or a `Result` of any of
    /// those to raise an error.
    #[must_use = "builder methods must be chained or built"]
    pub fn method<F, R>(mut self, method: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> R + Send + Sync + 'static,
        R: IntoVerdict,
    {
        self.method = Some(Arc::new(move |value: &Value, params: &[Value]| {
            method(value, params).into_verdict()
        }));
        self
    }

    /// Sets the default message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the `dynamic` flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Sets a custom message formatter.
    #[must_use = "builder methods must be chained or built"]
    pub fn format<F>(mut self, format: F) -> Self
    where
        F: Fn(&Value, &[Value], Option<&str>) -> String + Send + Sync + 'static,
    {
        self.format = Some(Arc::new(format));
        self
    }
}

impl MessageSource for ValidatorRegister {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn formatter(&self) -> Option<&FormatFn> {
        self.format.as_ref()
    }
}

impl fmt::Debug for ValidatorRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegister")
            .field("name", &self.name)
            .field("method", &self.method.as_ref().map(|_| ".."))
            .field("dynamic", &self.dynamic)
            .field("message", &self.message)
            .field("format", &self.format.as_ref().map(|_| ".."))
            .finish()
    }
}

// ============================================================================
// VALIDATOR INFO
// ============================================================================

/// A registered validator in its adapted form.
///
/// Immutable once built; registries share it through `Arc`.
#[derive(Clone)]
pub struct ValidatorInfo {
    name: String,
    dynamic: bool,
    message: Option<String>,
    format: Option<FormatFn>,
    method: AdaptedFn,
}

impl ValidatorInfo {
    /// Adapts a register. The register is snapshotted; later changes to it
    /// do not reach the adapted validator.
    pub fn adapt(register: &ValidatorRegister) -> Self {
        Self {
            name: register.name.clone(),
            dynamic: register.dynamic,
            message: register.message.clone(),
            format: register.format.clone(),
            method: crate::adapter::adapt(register),
        }
    }

    /// Registry key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The consumer-defined `dynamic` flag.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// The adapted validator.
    #[must_use]
    pub fn method(&self) -> &AdaptedFn {
        &self.method
    }

    /// Invokes the adapted validator.
    pub fn validate(
        &self,
        value: Value,
        params: Vec<Value>,
    ) -> BoxFuture<'static, Result<(), ValidateError>> {
        (self.method)(value, params)
    }
}

impl MessageSource for ValidatorInfo {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn formatter(&self) -> Option<&FormatFn> {
        self.format.as_ref()
    }
}

impl fmt::Debug for ValidatorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorInfo")
            .field("name", &self.name)
            .field("dynamic", &self.dynamic)
            .field("message", &self.message)
            .field("format", &self.format.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

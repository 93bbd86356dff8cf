//! Error types for validation outcomes and registry operations
//!
//! Three kinds of trouble are kept apart:
//!
//! - [`ValidationFailure`]: the input was rejected. Expected, user-facing.
//! - [`ValidateError::ContractViolation`]: the validator itself is broken
//!   (it produced something other than a boolean, a string or a deferred
//!   outcome). A programming error, not a data error.
//! - [`RegistryError`]: strict registration refused an entry.

use serde_json::Value;

/// Error type a raw validator may raise, synchronously or from a deferred outcome.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Return shapes a validator is allowed to produce.
pub const ALLOWED_RETURN_TYPES: [&str; 3] = ["deferred", "boolean", "string"];

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// A rejected validation.
///
/// Carries everything needed to render or re-render the failure: the
/// validated value, the positional parameters the validator was called
/// with, the final formatted message and the name of the validator that
/// produced it.
///
/// # Examples
///
/// ```rust
/// use verdict_validator::foundation::ValidationFailure;
/// use serde_json::json;
///
/// let failure = ValidationFailure::new(json!(5), vec![json!(1)], "too small", "min");
/// assert_eq!(failure.to_string(), "too small");
/// assert_eq!(failure.validator_name, "min");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    /// The value that was validated.
    pub value: Value,

    /// Positional parameters passed alongside the value.
    pub params: Vec<Value>,

    /// Final, formatted failure message.
    pub message: String,

    /// Name of the validator that rejected the value.
    pub validator_name: String,
}

impl ValidationFailure {
    /// Creates a new failure.
    pub fn new(
        value: Value,
        params: Vec<Value>,
        message: impl Into<String>,
        validator_name: impl Into<String>,
    ) -> Self {
        Self {
            value,
            params,
            message: message.into(),
            validator_name: validator_name.into(),
        }
    }

    /// Replaces the message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

// ============================================================================
// VALIDATE ERROR
// ============================================================================

/// Rejection payload of an adapted validator call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidateError {
    /// The value did not pass.
    #[error(transparent)]
    Failed(#[from] ValidationFailure),

    /// The validator produced a return shape outside [`ALLOWED_RETURN_TYPES`].
    #[error(
        "validator '{validator}' returned unsupported type `{found}`, expected one of: deferred, boolean, string"
    )]
    ContractViolation {
        /// Name of the offending validator.
        validator: String,
        /// Description of what it produced instead.
        found: String,
    },

    /// No validator is registered under the requested name.
    #[error("no validator registered under '{0}'")]
    UnknownValidator(String),
}

impl ValidateError {
    /// Creates a contract violation for `validator`.
    pub fn contract_violation(validator: impl Into<String>, found: impl Into<String>) -> Self {
        Self::ContractViolation {
            validator: validator.into(),
            found: found.into(),
        }
    }

    /// Returns true if the value was rejected by a working validator.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns true if the validator broke its return-type contract.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }

    /// Returns the validation failure, if this is one.
    #[must_use]
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Consumes the error and returns the validation failure, if this is one.
    #[must_use]
    pub fn into_failure(self) -> Option<ValidationFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// User-facing message for a failure, or the error text otherwise.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Failed(failure) => failure.message.clone(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// REGISTRY ERROR
// ============================================================================

/// Errors raised by strict registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The register has an empty or whitespace-only name.
    #[error("validator name must not be empty")]
    EmptyName,

    /// A validator with this name exists and overwriting is disabled.
    #[error("validator '{0}' is already registered")]
    Duplicate(String),
}

// ============================================================================
// TESTS
// ============================================================================

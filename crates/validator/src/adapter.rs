//! Outcome adapter
//!
//! [`adapt`] turns a raw validator into an [`AdaptedFn`]: a function that
//! always returns one future, settling exactly once with `Ok(())` or a
//! [`ValidateError`]. Errors and panics raised by the validator, its
//! deferred future, or a custom formatter are caught here and never escape
//! the call.
//!
//! | Verdict            | Outcome                                                   |
//! |--------------------|-----------------------------------------------------------|
//! | `Pass`             | `Ok(())`                                                  |
//! | `Fail`             | failure with the default message                          |
//! | `Message(s)`       | failure with `s` as the template                          |
//! | `Deferred(f)`      | `f` is awaited; its error or panic text becomes the template |
//! | `Unsupported(t)`   | [`ValidateError::ContractViolation`]                      |
//! | raised error/panic | failure whose message is the raw error text               |

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde_json::Value;

use crate::format::format_message;
use crate::foundation::{AdaptedFn, ValidateError, ValidationFailure, ValidatorRegister, Verdict};

/// Wraps a register's validator into the uniform async contract.
///
/// The register is snapshotted at this point.
///
/// # Examples
///
/// ```rust
/// use futures::FutureExt;
/// use serde_json::json;
/// use verdict_validator::adapter::adapt;
/// use verdict_validator::foundation::ValidatorRegister;
///
/// let register = ValidatorRegister::new("positive")
///     .method(|value, _| value.as_i64().is_some_and(|n| n > 0))
///     .message("{{VALUE}} is not positive");
/// let validate = adapt(&register);
///
/// assert!(validate(json!(3), vec![]).now_or_never().unwrap().is_ok());
/// let error = validate(json!(-1), vec![]).now_or_never().unwrap().unwrap_err();
/// assert_eq!(error.message(), "-1 is not positive");
/// ```
pub fn adapt(register: &ValidatorRegister) -> AdaptedFn {
    let snapshot = Arc::new(register.clone());

    Arc::new(move |value: Value, params: Vec<Value>| {
        invoke(Arc::clone(&snapshot), value, params)
    })
}

fn invoke(
    register: Arc<ValidatorRegister>,
    value: Value,
    params: Vec<Value>,
) -> BoxFuture<'static, Result<(), ValidateError>> {
    let Some(method) = register.method.as_ref() else {
        return violation(&register.name, "undefined");
    };

    // Default message and validator call share one unwind guard.
    let returned = panic::catch_unwind(AssertUnwindSafe(|| {
        let message = format_message(&*register, &value, &params, register.message.as_deref());
        method(&value, params.as_slice()).map(|verdict| (message, verdict))
    }));

    let (message, verdict) = match returned {
        Ok(Ok(prepared)) => prepared,
        Ok(Err(error)) => {
            return reject(ValidationFailure::new(
                value,
                params,
                error.to_string(),
                register.name.as_str(),
            ));
        }
        Err(payload) => {
            return reject(ValidationFailure::new(
                value,
                params,
                panic_message(&*payload),
                register.name.as_str(),
            ));
        }
    };
    let mut failure = ValidationFailure::new(value, params, message, register.name.as_str());

    match verdict {
        Verdict::Pass => resolve(&register.name),
        Verdict::Fail => reject(failure),
        Verdict::Message(message) => {
            failure.message = format_override(&register, &failure, &message);
            reject(failure)
        }
        Verdict::Deferred(outcome) => async move {
            let text = match AssertUnwindSafe(outcome).catch_unwind().await {
                Ok(Ok(())) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(validator = %register.name, "deferred validation passed");
                    return Ok(());
                }
                Ok(Err(error)) => error.to_string(),
                Err(payload) => panic_message(&*payload),
            };
            failure.message = format_override(&register, &failure, &text);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                validator = %register.name,
                message = %failure.message,
                "deferred validation failed"
            );
            Err(failure.into())
        }
        .boxed(),
        Verdict::Unsupported(found) => violation(&register.name, &found),
    }
}

/// Formats `template` as an override; a panicking formatter yields its panic text.
fn format_override(
    register: &ValidatorRegister,
    failure: &ValidationFailure,
    template: &str,
) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| {
        format_message(register, &failure.value, &failure.params, Some(template))
    }))
    .unwrap_or_else(|payload| panic_message(&*payload))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn resolve(name: &str) -> BoxFuture<'static, Result<(), ValidateError>> {
    #[cfg(feature = "tracing")]
    tracing::trace!(validator = %name, "validation passed");
    future::ready(Ok(())).boxed()
}

fn reject(failure: ValidationFailure) -> BoxFuture<'static, Result<(), ValidateError>> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        validator = %failure.validator_name,
        message = %failure.message,
        "validation failed"
    );
    future::ready(Err(failure.into())).boxed()
}

fn violation(name: &str, found: &str) -> BoxFuture<'static, Result<(), ValidateError>> {
    #[cfg(feature = "tracing")]
    tracing::warn!(validator = %name, found, "validator broke its return-type contract");
    future::ready(Err(ValidateError::contract_violation(name, found))).boxed()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "validator panicked".to_owned()
    }
}

// ============================================================================
// TESTS
// ============================================================================

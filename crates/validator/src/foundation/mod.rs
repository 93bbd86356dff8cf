//! Core types of the validation contract
//!
//! - **Verdict**: what a raw validator returns (`Pass`, `Fail`, `Message`,
//!   `Deferred`, `Unsupported`)
//! - **Registers**: `ValidatorRegister` (raw entry) and `ValidatorInfo`
//!   (adapted entry)
//! - **Errors**: `ValidationFailure`, `ValidateError`, `RegistryError`
//!
//! # Return shapes
//!
//! A validator closure reports through any type implementing
//! [`IntoVerdict`]:
//!
//! ```rust
//! use verdict_validator::foundation::{ValidatorRegister, Verdict};
//!
//! // Boolean: pass or fail with the default message.
//! let required = ValidatorRegister::new("required")
//!     .method(|value, _| !value.is_null())
//!     .message("This field is required");
//!
//! // String: always fails, the string is the message.
//! let always = ValidatorRegister::new("never").method(|_, _| "never valid");
//!
//! // Deferred: settles later.
//! let unique = ValidatorRegister::new("unique").method(|value, _| {
//!     let taken = value == "admin";
//!     Verdict::deferred(async move {
//!         if taken { Err("{{VALUE}} is taken") } else { Ok(()) }
//!     })
//! });
//! ```

pub mod error;
pub mod register;
pub mod verdict;

pub use error::{
    ALLOWED_RETURN_TYPES, BoxError, RegistryError, ValidateError, ValidationFailure,
};
pub use register::{
    AdaptedFn, FormatFn, MessageSource, ValidatorFn, ValidatorInfo, ValidatorRegister,
};
pub use verdict::{IntoVerdict, Verdict, json_type_name};

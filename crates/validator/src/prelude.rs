//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the registry, the registration types, the verdict and the errors.
//!
//! # Examples
//!
//! ```rust
//! use verdict_validator::prelude::*;
//!
//! let mut registry = ValidatorRegistry::with_config(RegistryConfig::strict());
//! registry
//!     .try_add_by_register(ValidatorRegister::new("required").method(|v, _| !v.is_null()))
//!     .unwrap();
//! ```

// ============================================================================
// FOUNDATION: Verdict, registers, errors
// ============================================================================

pub use crate::foundation::{
    BoxError, IntoVerdict, RegistryError, ValidateError, ValidationFailure, ValidatorInfo,
    ValidatorRegister, Verdict,
};

// ============================================================================
// REGISTRY & CONFIG
// ============================================================================

pub use crate::config::RegistryConfig;
pub use crate::registry::ValidatorRegistry;

// ============================================================================
// STATIC HELPERS
// ============================================================================

pub use crate::adapter::adapt;
pub use crate::format::format_message;

//! # verdict-validator
//!
//! A named registry of validators with one uniform async contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use verdict_validator::prelude::*;
//! use serde_json::json;
//!
//! # futures::executor::block_on(async {
//! let mut registry = ValidatorRegistry::new();
//! registry.add("test", |value, _| value == "xueyou", Some("must be xueyou, not {{VALUE}}"));
//!
//! let error = registry.validate("test", json!("a"), vec![]).await.unwrap_err();
//! assert_eq!(error.message(), "must be xueyou, not a");
//! # });
//! ```
//!
//! ## Return shapes
//!
//! Validators return a `bool`, a string (always a failure, used as the
//! message), a [`Verdict::Deferred`](foundation::Verdict::Deferred) future,
//! or a `Result` of those to raise an error. Every shape is normalized by
//! the [`adapter`] into `Result<(), ValidateError>`.
//!
//! ## Messages
//!
//! Templates use `{0}`, `{1}`, ... for positional parameters and
//! `{{VALUE}}` for the validated value. See [`format`].

// ValidateError carries the full failure payload (value, params, message);
// boxing it would add an allocation to every rejected call.
#![allow(clippy::result_large_err)]

pub mod adapter;
pub mod config;
pub mod format;
pub mod foundation;
pub mod prelude;
pub mod registry;

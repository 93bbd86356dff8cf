//! Validator registry
//!
//! A dictionary of adapted validators keyed by name. Registration adapts
//! the raw validator once; lookups hand out shared `Arc<ValidatorInfo>`
//! handles.
//!
//! # Lookup
//!
//! [`ValidatorRegistry::get`] tries the exact name first. On a miss it
//! scans every entry for a case-insensitive match and returns the first
//! one in insertion order. The scan is linear; it is a fallback, not the
//! fast path.
//!
//! # Sharing
//!
//! [`ValidatorRegistry::merge`] copies `Arc` handles, not entries. Merged
//! registries share the same `ValidatorInfo` values. Entries are immutable,
//! so the sharing is never observable as mutation; re-registering a name in
//! one registry replaces that registry's handle only.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::RegistryConfig;
use crate::foundation::{
    IntoVerdict, RegistryError, ValidateError, ValidatorInfo, ValidatorRegister,
};

/// Named collection of adapted validators.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use verdict_validator::registry::ValidatorRegistry;
///
/// # futures::executor::block_on(async {
/// let mut registry = ValidatorRegistry::new();
/// registry.add(
///     "range",
///     |value, params| {
///         let n = value.as_f64().unwrap_or(f64::NAN);
///         n >= params[0].as_f64().unwrap_or(0.0) && n <= params[1].as_f64().unwrap_or(0.0)
///     },
///     Some("Must be between {0} and {1}, got {{VALUE}}"),
/// );
///
/// let error = registry
///     .validate("range", json!(50), vec![json!(1), json!(10)])
///     .await
///     .unwrap_err();
/// assert_eq!(error.message(), "Must be between 1 and 10, got 50");
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    dictionary: IndexMap<String, Arc<ValidatorInfo>>,
    config: RegistryConfig,
}

impl ValidatorRegistry {
    /// Creates an empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with `config`.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            dictionary: IndexMap::new(),
            config,
        }
    }

    /// Creates a registry holding every entry of `other`.
    ///
    /// The configuration is copied too.
    #[must_use]
    pub fn from_other(other: &Self) -> Self {
        let mut registry = Self::with_config(other.config.clone());
        registry.merge(Some(other));
        registry
    }

    /// Registers `method` under `name` with an optional default message.
    pub fn add<F, R>(
        &mut self,
        name: impl Into<String>,
        method: F,
        message: Option<&str>,
    ) -> &mut Self
    where
        F: Fn(&Value, &[Value]) -> R + Send + Sync + 'static,
        R: IntoVerdict,
    {
        let mut register = ValidatorRegister::new(name).method(method);
        register.message = message.map(str::to_owned);
        self.add_by_register(register)
    }

    /// Adapts and stores `register`, replacing any entry of the same name.
    ///
    /// Names are not checked; an empty name is stored like any other. Use
    /// [`try_add_by_register`](Self::try_add_by_register) to refuse it.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub fn add_by_register(&mut self, register: ValidatorRegister) -> &mut Self {
        #[cfg(feature = "tracing")]
        if register.name.is_empty() {
            tracing::warn!("registering validator with an empty name");
        }

        let info = Arc::new(ValidatorInfo::adapt(&register));
        let replaced = self
            .dictionary
            .insert(register.name, Arc::clone(&info))
            .is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(validator = %info.name(), replaced, "registered validator");

        self
    }

    /// Like [`add_by_register`](Self::add_by_register), but refuses blank
    /// names, and refuses existing names unless the configuration allows
    /// overwriting.
    pub fn try_add_by_register(
        &mut self,
        register: ValidatorRegister,
    ) -> Result<&mut Self, RegistryError> {
        if register.name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if !self.config.allow_overwrite && self.dictionary.contains_key(&register.name) {
            return Err(RegistryError::Duplicate(register.name));
        }
        Ok(self.add_by_register(register))
    }

    /// Looks up a validator by name.
    ///
    /// Exact match first; then, if enabled, the first case-insensitive
    /// match in insertion order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<ValidatorInfo>> {
        if let Some(info) = self.dictionary.get(name) {
            return Some(Arc::clone(info));
        }
        if !self.config.case_insensitive_lookup {
            return None;
        }

        let wanted = name.to_lowercase();
        self.dictionary
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .map(|(_, info)| Arc::clone(info))
    }

    /// Returns true if `get(name)` would find an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Copies every entry of `other` into this registry; `other` wins on
    /// name collisions. `None` is a no-op.
    pub fn merge(&mut self, other: Option<&Self>) -> &mut Self {
        let Some(other) = other else {
            return self;
        };

        for (name, info) in &other.dictionary {
            self.dictionary.insert(name.clone(), Arc::clone(info));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            merged = other.dictionary.len(),
            total = self.dictionary.len(),
            "merged validator registry"
        );

        self
    }

    /// Calls `callback` once per entry, in insertion order.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&str, &Arc<ValidatorInfo>),
    {
        for (name, info) in &self.dictionary {
            callback(name, info);
        }
    }

    /// Iterates over `(name, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ValidatorInfo>)> {
        self.dictionary.iter().map(|(name, info)| (name.as_str(), info))
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.dictionary.keys().map(String::as_str)
    }

    /// Number of registered validators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// The registry's configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Looks up `name` and runs it on `value` with `params`.
    ///
    /// A lookup miss is reported as [`ValidateError::UnknownValidator`].
    pub async fn validate(
        &self,
        name: &str,
        value: Value,
        params: Vec<Value>,
    ) -> Result<(), ValidateError> {
        let info = self
            .get(name)
            .ok_or_else(|| ValidateError::UnknownValidator(name.to_owned()))?;
        info.validate(value, params).await
    }
}

impl From<&ValidatorRegistry> for ValidatorRegistry {
    fn from(other: &ValidatorRegistry) -> Self {
        Self::from_other(other)
    }
}

impl<'a> IntoIterator for &'a ValidatorRegistry {
    type Item = (&'a String, &'a Arc<ValidatorInfo>);
    type IntoIter = indexmap::map::Iter<'a, String, Arc<ValidatorInfo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dictionary.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

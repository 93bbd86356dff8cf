//! Registry configuration

use serde::{Deserialize, Serialize};

/// Settings for a [`ValidatorRegistry`](crate::registry::ValidatorRegistry).
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use verdict_validator::config::RegistryConfig;
///
/// let config = RegistryConfig::from_json(r#"{ "allow_overwrite": false }"#).unwrap();
/// assert!(config.case_insensitive_lookup);
/// assert!(!config.allow_overwrite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Fall back to a case-insensitive scan when `get` misses an exact name.
    pub case_insensitive_lookup: bool,

    /// Let strict registration replace an existing name.
    ///
    /// Permissive registration (`add`, `add_by_register`) always overwrites.
    pub allow_overwrite: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            case_insensitive_lookup: true,
            allow_overwrite: true,
        }
    }
}

impl RegistryConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-name lookup only, and strict registration refuses duplicates.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            case_insensitive_lookup: false,
            allow_overwrite: false,
        }
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Enables or disables the case-insensitive fallback.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_case_insensitive_lookup(mut self, enabled: bool) -> Self {
        self.case_insensitive_lookup = enabled;
        self
    }

    /// Enables or disables overwriting in strict registration.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_allow_overwrite(mut self, enabled: bool) -> Self {
        self.allow_overwrite = enabled;
        self
    }
}

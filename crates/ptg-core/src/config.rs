//! Group mapping configuration.
//!
//! Configuration is loaded once per process from environment variables with
//! fixed defaults, then passed explicitly into the mapper.

use crate::error::{GroupMappingError, GroupMappingResult};

/// Default name of the custom attribute carrying raw group data.
pub const DEFAULT_GROUPS_ATTRIBUTE: &str = "custom:groups";

/// Environment variable overriding the group attribute name.
pub const ENV_GROUPS_ATTRIBUTE: &str = "GROUPS_ATTRIBUTE_NAME";

/// Environment variable enabling lenient SAML bracket handling.
pub const ENV_SAML_LENIENT_BRACKETS: &str = "GROUPS_SAML_LENIENT_BRACKETS";

/// Environment variable enabling suppression of the raw group attribute.
pub const ENV_SUPPRESS_ATTRIBUTE: &str = "GROUPS_SUPPRESS_ATTRIBUTE";

/// Group mapping configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMappingConfig {
    /// Name of the user attribute holding the raw group value.
    pub groups_attribute: String,

    /// Accept SAML values without the surrounding `[` and `]`.
    pub saml_lenient_brackets: bool,

    /// Add the group attribute to `claimsToSuppress` when it was present.
    pub suppress_groups_attribute: bool,
}

impl GroupMappingConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`GroupMappingError::Config`] if a variable holds an invalid value.
    pub fn from_env() -> GroupMappingResult<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`GroupMappingError::Config`] if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> GroupMappingResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groups_attribute = match lookup(ENV_GROUPS_ATTRIBUTE) {
            Some(name) if name.trim().is_empty() => {
                return Err(GroupMappingError::config(format!(
                    "{ENV_GROUPS_ATTRIBUTE} must not be empty"
                )));
            }
            Some(name) => name.trim().to_string(),
            None => DEFAULT_GROUPS_ATTRIBUTE.to_string(),
        };

        let saml_lenient_brackets = lookup(ENV_SAML_LENIENT_BRACKETS)
            .map(|v| parse_flag(ENV_SAML_LENIENT_BRACKETS, &v))
            .transpose()?
            .unwrap_or(false);

        let suppress_groups_attribute = lookup(ENV_SUPPRESS_ATTRIBUTE)
            .map(|v| parse_flag(ENV_SUPPRESS_ATTRIBUTE, &v))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            groups_attribute,
            saml_lenient_brackets,
            suppress_groups_attribute,
        })
    }

    /// Sets the group attribute name.
    #[must_use]
    pub fn with_groups_attribute(mut self, name: impl Into<String>) -> Self {
        self.groups_attribute = name.into();
        self
    }

    /// Sets lenient SAML bracket handling.
    #[must_use]
    pub const fn with_saml_lenient_brackets(mut self, lenient: bool) -> Self {
        self.saml_lenient_brackets = lenient;
        self
    }

    /// Sets suppression of the raw group attribute.
    #[must_use]
    pub const fn with_suppress_groups_attribute(mut self, suppress: bool) -> Self {
        self.suppress_groups_attribute = suppress;
        self
    }
}

impl Default for GroupMappingConfig {
    fn default() -> Self {
        Self {
            groups_attribute: DEFAULT_GROUPS_ATTRIBUTE.to_string(),
            saml_lenient_brackets: false,
            suppress_groups_attribute: false,
        }
    }
}

fn parse_flag(key: &str, value: &str) -> GroupMappingResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(GroupMappingError::config(format!(
            "{key} expects a boolean, got {other:?}"
        ))),
    }
}

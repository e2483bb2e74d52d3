//! Group mapping error types.
//!
//! Only two conditions abort token issuance: an unreadable `identities`
//! attribute and a group attribute that does not match its provider's
//! encoding. Unknown providers and missing attributes are recovered by the
//! mapper and never surface here.

use thiserror::Error;

/// Errors that can occur while mapping groups into the override claim.
#[derive(Debug, Error)]
pub enum GroupMappingError {
    /// The `identities` attribute is missing, not valid JSON, or empty.
    #[error("malformed identities attribute: {0}")]
    MalformedIdentity(String),

    /// The raw group attribute does not match the provider's encoding.
    #[error("cannot decode {provider} group attribute: {reason}")]
    GroupDecode {
        /// Provider type whose encoding was expected.
        provider: String,
        /// What was wrong with the value.
        reason: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GroupMappingError {
    /// Creates a malformed identity error.
    #[must_use]
    pub fn malformed_identity(msg: impl Into<String>) -> Self {
        Self::MalformedIdentity(msg.into())
    }

    /// Creates a group decode error.
    #[must_use]
    pub fn group_decode(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::GroupDecode {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the stable kind name, used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedIdentity(_) => "MalformedIdentityError",
            Self::GroupDecode { .. } => "GroupDecodeError",
            Self::Config(_) => "ConfigError",
        }
    }

    /// Checks if this error was caused by the incoming event.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::MalformedIdentity(_) | Self::GroupDecode { .. })
    }
}

/// Result type for group mapping operations.
pub type GroupMappingResult<T> = Result<T, GroupMappingError>;

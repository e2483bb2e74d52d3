//! Federated identity records.
//!
//! The issuance platform stores the identities linked to a federated user as a
//! JSON string in the `identities` user attribute.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the user attribute holding the encoded identity list.
pub const IDENTITIES_ATTRIBUTE: &str = "identities";

/// Identity provider type.
///
/// Only OIDC and SAML group encodings are understood; every other value is
/// kept verbatim so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderType {
    /// `OpenID` Connect provider.
    Oidc,
    /// SAML 2.0 provider.
    Saml,
    /// Any other provider type (social providers, custom, ...).
    Other(String),
}

impl ProviderType {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Oidc => "OIDC",
            Self::Saml => "SAML",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ProviderType {
    fn from(s: &str) -> Self {
        match s {
            "OIDC" => Self::Oidc,
            "SAML" => Self::Saml,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ProviderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A federated identity linked to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Identity provider type.
    pub provider_type: ProviderType,

    /// Identity provider name as configured on the user pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    /// Subject identifier at the identity provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Remaining identity fields (issuer, primary, dateCreated, ...).
    #[serde(flatten)]
    pub additional: HashMap<String, serde_json::Value>,
}

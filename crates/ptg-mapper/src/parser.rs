//! Group Parser.
//!
//! Identity providers deliver group membership through a single string
//! attribute whose encoding depends on the provider type:
//!
//! - OIDC: a JSON array of strings, e.g. `["g1","g2"]`
//! - SAML: a bracketed, comma-separated list, e.g. `[g1, g2]`
//!
//! The SAML form is not a standard serialization. Elements are split on
//! commas and trimmed; no quoting or escaping is recognised.

use ptg_core::{GroupMappingConfig, GroupMappingError, GroupMappingResult};
use ptg_model::ProviderType;

/// Encoding of a raw group attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupEncoding {
    /// JSON array of strings, decoded as-is.
    JsonArray,
    /// `[a, b, c]` with each element trimmed.
    BracketList {
        /// Tolerate a missing `[` or `]`.
        lenient: bool,
    },
}

impl GroupEncoding {
    /// Selects the encoding for a provider type.
    ///
    /// Returns `None` for providers whose group attributes are not handled.
    #[must_use]
    pub fn for_provider(provider: &ProviderType, config: &GroupMappingConfig) -> Option<Self> {
        match provider {
            ProviderType::Oidc => Some(Self::JsonArray),
            ProviderType::Saml => Some(Self::BracketList {
                lenient: config.saml_lenient_brackets,
            }),
            ProviderType::Other(_) => None,
        }
    }

    /// Decodes a raw attribute value.
    ///
    /// # Errors
    ///
    /// Returns a description of the first structural problem found.
    pub fn decode(self, raw: &str) -> Result<Vec<String>, String> {
        match self {
            Self::JsonArray => serde_json::from_str(raw).map_err(|e| e.to_string()),
            Self::BracketList { lenient } => decode_bracket_list(raw, lenient),
        }
    }
}

/// Parses the raw group attribute for the given provider.
///
/// An absent attribute yields no groups. Unknown providers are reported with a
/// warning and also yield no groups, so they never block token issuance.
///
/// # Errors
///
/// Returns [`GroupMappingError::GroupDecode`] if the value does not match the
/// provider's encoding.
pub fn parse_groups(
    provider: &ProviderType,
    raw: Option<&str>,
    config: &GroupMappingConfig,
) -> GroupMappingResult<Vec<String>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let Some(encoding) = GroupEncoding::for_provider(provider, config) else {
        tracing::warn!(
            provider_type = %provider,
            raw_value = raw,
            "Not handling groups for unsupported provider type"
        );
        return Ok(Vec::new());
    };

    encoding
        .decode(raw)
        .map_err(|reason| GroupMappingError::group_decode(provider.as_str(), reason))
}

fn decode_bracket_list(raw: &str, lenient: bool) -> Result<Vec<String>, String> {
    let value = raw.trim();

    let value = match value.strip_prefix('[') {
        Some(rest) => rest,
        None if lenient => value,
        None => return Err("missing leading '['".to_string()),
    };

    let inner = match value.strip_suffix(']') {
        Some(rest) => rest,
        None if lenient => value,
        None => return Err("missing trailing ']'".to_string()),
    };

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(inner.split(',').map(|group| group.trim().to_string()).collect())
}

//! Attribute Locator.
//!
//! Finds the raw group value on the user and the type of the identity
//! provider that federated the user.

use ptg_core::{GroupMappingConfig, GroupMappingError, GroupMappingResult};
use ptg_model::identity::IDENTITIES_ATTRIBUTE;
use ptg_model::{Identity, PreTokenGenerationEvent, ProviderType};

/// Returns the configured group attribute name and its raw value, if present.
#[must_use]
pub fn locate_groups_attribute<'c, 'e>(
    config: &'c GroupMappingConfig,
    event: &'e PreTokenGenerationEvent,
) -> (&'c str, Option<&'e str>) {
    let name = config.groups_attribute.as_str();
    (name, event.user_attribute(name))
}

/// Resolves the provider type from the first entry of the `identities` attribute.
///
/// # Errors
///
/// Returns [`GroupMappingError::MalformedIdentity`] if the attribute is absent,
/// is not a JSON array of identity records, or is empty.
pub fn resolve_provider_type(event: &PreTokenGenerationEvent) -> GroupMappingResult<ProviderType> {
    let raw = event.user_attribute(IDENTITIES_ATTRIBUTE).ok_or_else(|| {
        GroupMappingError::malformed_identity(format!("{IDENTITIES_ATTRIBUTE} attribute is missing"))
    })?;

    let identities: Vec<Identity> = serde_json::from_str(raw)
        .map_err(|e| GroupMappingError::malformed_identity(e.to_string()))?;

    identities
        .into_iter()
        .next()
        .map(|identity| identity.provider_type)
        .ok_or_else(|| GroupMappingError::malformed_identity("identity list is empty"))
}

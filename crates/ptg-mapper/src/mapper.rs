//! Group claim mapper pipeline.

use ptg_core::{GroupMappingConfig, GroupMappingResult};
use ptg_model::PreTokenGenerationEvent;

use crate::locator::{locate_groups_attribute, resolve_provider_type};
use crate::merger::merge_groups;
use crate::parser::parse_groups;
use crate::response::build_response;

/// Maps the federated group attribute into the group override claim.
///
/// The mapper holds no per-request state and can be shared across
/// invocations.
#[derive(Debug, Clone, Default)]
pub struct GroupClaimMapper {
    config: GroupMappingConfig,
}

impl GroupClaimMapper {
    /// Creates a mapper with the given configuration.
    #[must_use]
    pub const fn new(config: GroupMappingConfig) -> Self {
        Self { config }
    }

    /// Runs locate, parse, merge and build on one event.
    ///
    /// The identity provider is only resolved when the group attribute is
    /// present; a user without the attribute contributes no groups.
    ///
    /// # Errors
    ///
    /// Returns [`ptg_core::GroupMappingError::MalformedIdentity`] if the
    /// provider type cannot be read, and
    /// [`ptg_core::GroupMappingError::GroupDecode`] if the attribute does not
    /// match the provider's encoding.
    pub fn apply(
        &self,
        event: PreTokenGenerationEvent,
    ) -> GroupMappingResult<PreTokenGenerationEvent> {
        let (attribute, raw) = locate_groups_attribute(&self.config, &event);

        let parsed = match raw {
            Some(raw) => {
                let provider = resolve_provider_type(&event)?;
                tracing::debug!(attribute, provider_type = %provider, "Located group attribute");
                parse_groups(&provider, Some(raw), &self.config)?
            }
            None => {
                tracing::debug!(attribute, "Group attribute not present");
                Vec::new()
            }
        };

        let attribute_present = raw.is_some();
        let parsed_count = parsed.len();
        let merged = merge_groups(event.existing_groups(), parsed);

        tracing::debug!(
            existing = merged.len() - parsed_count,
            parsed = parsed_count,
            "Merged group override"
        );

        let suppress =
            (self.config.suppress_groups_attribute && attribute_present).then_some(attribute);
        Ok(build_response(event, merged, suppress))
    }
}

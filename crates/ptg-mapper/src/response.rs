//! Response Builder.
//!
//! Writes the merged groups into
//! `response.claimsOverrideDetails.groupOverrideDetails.groupsToOverride`.
//! Any override details already on the response are kept; only the group
//! list is replaced.

use ptg_model::{ClaimsOverrideDetails, GroupOverrideDetails, PreTokenGenerationEvent};

/// Populates the group override of the event's response section.
///
/// `suppress` names a claim to add to `claimsToSuppress`; pass `None` to leave
/// suppression untouched.
#[must_use]
pub fn build_response(
    mut event: PreTokenGenerationEvent,
    groups: Vec<String>,
    suppress: Option<&str>,
) -> PreTokenGenerationEvent {
    let details = event
        .response
        .claims_override_details
        .get_or_insert_with(ClaimsOverrideDetails::default);

    details
        .group_override_details
        .get_or_insert_with(GroupOverrideDetails::default)
        .groups_to_override = groups;

    if let Some(claim) = suppress {
        details.suppress_claim(claim);
    }

    event
}

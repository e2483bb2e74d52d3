//! Pre-token-generation event envelope.
//!
//! The issuance platform sends the whole event and expects the same envelope
//! back with the response section filled in. Only the members the mapper reads
//! or writes are modelled; everything else is kept in `extra` maps so it is
//! returned untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event received from the issuance platform once per token request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTokenGenerationEvent {
    /// Request section (read-only for the mapper).
    pub request: PreTokenGenerationRequest,

    /// Response section populated by the mapper.
    #[serde(default)]
    pub response: PreTokenGenerationResponse,

    /// Envelope fields not owned by the mapper (`version`, `triggerSource`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreTokenGenerationEvent {
    /// Creates an event with the given existing groups and user attributes.
    #[must_use]
    pub fn new<G, A, K, V>(groups: G, attributes: A) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            request: PreTokenGenerationRequest {
                group_configuration: GroupConfiguration {
                    groups_to_override: groups.into_iter().map(Into::into).collect(),
                    ..GroupConfiguration::default()
                },
                user_attributes: attributes
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
                extra: Map::new(),
            },
            response: PreTokenGenerationResponse::default(),
            extra: Map::new(),
        }
    }

    /// Gets a user attribute by name.
    #[must_use]
    pub fn user_attribute(&self, name: &str) -> Option<&str> {
        self.request.user_attributes.get(name).map(String::as_str)
    }

    /// Groups already staged for override by the platform.
    #[must_use]
    pub fn existing_groups(&self) -> &[String] {
        &self.request.group_configuration.groups_to_override
    }

    /// Groups written to the response, if any.
    #[must_use]
    pub fn groups_to_override(&self) -> Option<&[String]> {
        self.response
            .claims_override_details
            .as_ref()?
            .group_override_details
            .as_ref()
            .map(|details| details.groups_to_override.as_slice())
    }
}

/// Request section of the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTokenGenerationRequest {
    /// Groups and roles the platform already resolved for the user.
    #[serde(default)]
    pub group_configuration: GroupConfiguration,

    /// User attributes (attribute name to string value).
    #[serde(default)]
    pub user_attributes: HashMap<String, String>,

    /// Other request fields (`clientMetadata`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Group configuration resolved by the platform before the hook runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfiguration {
    /// Groups already staged for override, in order.
    #[serde(default)]
    pub groups_to_override: Vec<String>,

    /// IAM roles staged for override.
    #[serde(default)]
    pub iam_roles_to_override: Vec<String>,

    /// Other fields (`preferredRole`, ...), kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response section of the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreTokenGenerationResponse {
    /// Claim overrides applied to the issued tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims_override_details: Option<ClaimsOverrideDetails>,

    /// Other response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Claim overrides applied by the platform when issuing tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsOverrideDetails {
    /// Claims to add or replace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims_to_add_or_override: Option<HashMap<String, Value>>,

    /// Claims removed from the issued tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims_to_suppress: Option<Vec<String>>,

    /// Group claim override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_override_details: Option<GroupOverrideDetails>,

    /// Other fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimsOverrideDetails {
    /// Adds a claim to the suppression list unless already listed.
    pub fn suppress_claim(&mut self, name: &str) {
        let suppressed = self.claims_to_suppress.get_or_insert_with(Vec::new);
        if !suppressed.iter().any(|claim| claim == name) {
            suppressed.push(name.to_string());
        }
    }
}

/// Group claim override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOverrideDetails {
    /// Groups placed in the issued token, in order.
    #[serde(default)]
    pub groups_to_override: Vec<String>,

    /// IAM roles placed in the issued token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_roles_to_override: Option<Vec<String>>,

    /// Preferred IAM role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_role: Option<String>,

    /// Other fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//! Group override scenarios over full platform events.

use ptg_core::GroupMappingConfig;
use ptg_integration_tests::{
    base_event, event_with, load_json, FACEBOOK_IDENTITIES, OIDC_IDENTITIES, SAML_IDENTITIES,
};
use ptg_mapper::GroupClaimMapper;
use ptg_model::PreTokenGenerationEvent;
use serde_json::json;

fn map(event: PreTokenGenerationEvent) -> PreTokenGenerationEvent {
    GroupClaimMapper::default().apply(event).unwrap()
}

fn groups(event: &PreTokenGenerationEvent) -> Vec<String> {
    event.groups_to_override().unwrap().to_vec()
}

#[test]
fn empty_params_yield_empty_override() {
    let event = map(base_event());

    assert!(groups(&event).is_empty());
    let details = event.response.claims_override_details.unwrap();
    assert!(details.claims_to_suppress.is_none());
    assert!(details.claims_to_add_or_override.is_none());
}

#[test]
fn scenario_a_saml_groups_without_existing() {
    let event = map(event_with(
        &[],
        &[("custom:groups", "[test1, test2]"), ("identities", SAML_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["test1", "test2"]);
}

#[test]
fn scenario_b_empty_saml_list_keeps_existing() {
    let event = map(event_with(
        &["test"],
        &[("custom:groups", "[]"), ("identities", SAML_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["test"]);
}

#[test]
fn scenario_c_saml_groups_appended() {
    let event = map(event_with(
        &["test"],
        &[("custom:groups", "[test2]"), ("identities", SAML_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["test", "test2"]);
}

#[test]
fn scenario_d_no_attribute_keeps_existing() {
    let event = map(event_with(&["test", "test2"], &[]));

    assert_eq!(groups(&event), ["test", "test2"]);
}

#[test]
fn scenario_e_unsupported_provider_keeps_existing() {
    let event = map(event_with(
        &["test"],
        &[("custom:groups", "[admins, users]"), ("identities", FACEBOOK_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["test"]);
}

#[test]
fn oidc_groups_appended_in_order() {
    let event = map(event_with(
        &["staff"],
        &[("custom:groups", r#"["b","a","b"]"#), ("identities", OIDC_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["staff", "b", "a", "b"]);
}

#[test]
fn duplicates_between_existing_and_parsed_are_kept() {
    let event = map(event_with(
        &["test", "test2"],
        &[("custom:groups", "[test2, test]"), ("identities", SAML_IDENTITIES)],
    ));

    assert_eq!(groups(&event), ["test", "test2", "test2", "test"]);
}

#[test]
fn custom_attribute_name() {
    let mapper = GroupClaimMapper::new(
        GroupMappingConfig::default().with_groups_attribute("custom:ADGroups"),
    );
    let event = mapper
        .apply(event_with(
            &[],
            &[("custom:ADGroups", "[test1, test2]"), ("identities", SAML_IDENTITIES)],
        ))
        .unwrap();

    assert_eq!(groups(&event), ["test1", "test2"]);
}

#[test]
fn suppression_of_raw_attribute() {
    let mapper = GroupClaimMapper::new(
        GroupMappingConfig::default()
            .with_groups_attribute("custom:ADGroups")
            .with_suppress_groups_attribute(true),
    );

    let event = mapper
        .apply(event_with(
            &["test"],
            &[("custom:ADGroups", "[]"), ("identities", SAML_IDENTITIES)],
        ))
        .unwrap();
    let details = event.response.claims_override_details.unwrap();
    assert_eq!(details.claims_to_suppress, Some(vec!["custom:ADGroups".to_string()]));

    let event = mapper.apply(event_with(&["test", "test2"], &[])).unwrap();
    let details = event.response.claims_override_details.unwrap();
    assert!(details.claims_to_suppress.is_none());
}

#[test]
fn unowned_fields_pass_through() {
    let input: PreTokenGenerationEvent =
        serde_json::from_value(load_json("oidc_with_overrides.json")).unwrap();
    let output = serde_json::to_value(map(input)).unwrap();

    assert_eq!(output["triggerSource"], "TokenGeneration_RefreshTokens");
    assert_eq!(output["callerContext"]["clientId"], "7h8i9j0k4a1b2c3d4e5f6g");
    assert_eq!(output["request"]["clientMetadata"], json!({ "source": "refresh" }));
    assert_eq!(
        output["request"]["groupConfiguration"],
        json!({
            "groupsToOverride": ["pool-admins"],
            "iamRolesToOverride": ["arn:aws:iam::123456789012:role/pool-admins"],
            "preferredRole": "arn:aws:iam::123456789012:role/pool-admins"
        })
    );
    assert_eq!(
        output["response"],
        json!({
            "claimsOverrideDetails": {
                "claimsToAddOrOverride": { "tenant": "acme" },
                "groupOverrideDetails": {
                    "groupsToOverride": ["pool-admins", "engineering", "on-call"]
                }
            }
        })
    );
}

#[test]
fn invocations_are_independent() {
    let mapper = GroupClaimMapper::default();

    let first = mapper
        .apply(event_with(
            &["a"],
            &[("custom:groups", "[b]"), ("identities", SAML_IDENTITIES)],
        ))
        .unwrap();
    let second = mapper.apply(event_with(&["c"], &[])).unwrap();

    assert_eq!(groups(&first), ["a", "b"]);
    assert_eq!(groups(&second), ["c"]);
}

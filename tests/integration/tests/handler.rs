//! Hosted handler round trips.

use lambda_runtime::{Context, LambdaEvent};
use ptg_integration_tests::{event_with, load_json, SAML_IDENTITIES};
use ptg_lambda::handler;
use ptg_mapper::GroupClaimMapper;
use ptg_model::PreTokenGenerationEvent;

#[tokio::test]
async fn handler_maps_platform_payload() {
    let payload: PreTokenGenerationEvent =
        serde_json::from_value(load_json("oidc_with_overrides.json")).unwrap();
    let mapper = GroupClaimMapper::default();

    let result = handler(&mapper, LambdaEvent::new(payload, Context::default()))
        .await
        .unwrap();

    assert_eq!(
        result.groups_to_override().unwrap(),
        ["pool-admins", "engineering", "on-call"].map(String::from)
    );
}

#[tokio::test]
async fn handler_fails_invocation_on_malformed_identities() {
    let payload = event_with(&[], &[("custom:groups", "[g1]"), ("identities", "{}")]);
    let mapper = GroupClaimMapper::default();

    let err = handler(&mapper, LambdaEvent::new(payload, Context::default()))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("malformed identities attribute"));
}

#[tokio::test]
async fn handler_shares_mapper_across_invocations() {
    let mapper = GroupClaimMapper::default();

    for existing in ["a", "b", "c"] {
        let payload = event_with(
            &[existing],
            &[("custom:groups", "[x]"), ("identities", SAML_IDENTITIES)],
        );
        let result = handler(&mapper, LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert_eq!(
            result.groups_to_override().unwrap(),
            [existing, "x"].map(String::from)
        );
    }
}

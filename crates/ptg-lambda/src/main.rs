//! # Group Claim Mapper
//!
//! Runtime entry point for the pre-token-generation hook.

#![forbid(unsafe_code)]
#![deny(warnings)]

use lambda_runtime::service_fn;
use ptg_core::GroupMappingConfig;
use ptg_lambda::{handler, init_tracing, RuntimeSettings};
use ptg_mapper::GroupClaimMapper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(&RuntimeSettings::from_env());

    let config = GroupMappingConfig::from_env()?;
    tracing::info!(
        groups_attribute = %config.groups_attribute,
        saml_lenient_brackets = config.saml_lenient_brackets,
        suppress_groups_attribute = config.suppress_groups_attribute,
        "Group claim mapper starting"
    );

    let mapper = GroupClaimMapper::new(config);
    let mapper = &mapper;

    lambda_runtime::run(service_fn(move |event| async move {
        handler(mapper, event).await
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

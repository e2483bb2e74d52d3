//! # ptg-lambda
//!
//! Hosted entry point for the group claim mapper.
//!
//! The platform invokes [`handler`] once per token request. Configuration is
//! loaded once at cold start and shared by every invocation.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;

use lambda_runtime::{Error, LambdaEvent};
use ptg_mapper::GroupClaimMapper;
use ptg_model::PreTokenGenerationEvent;
use tracing_subscriber::EnvFilter;

pub use config::{LogFormat, RuntimeSettings};

/// Handles one pre-token-generation invocation.
///
/// # Errors
///
/// Returns the mapping error when the identities or group attribute cannot be
/// decoded; the platform then fails the authentication attempt.
pub async fn handler(
    mapper: &GroupClaimMapper,
    event: LambdaEvent<PreTokenGenerationEvent>,
) -> Result<PreTokenGenerationEvent, Error> {
    let (payload, context) = event.into_parts();

    let span = tracing::info_span!("pre_token_generation", request_id = %context.request_id);

    span.in_scope(|| {
        mapper.apply(payload).map_err(|err| {
            tracing::error!(
                kind = err.kind(),
                input = err.is_input_error(),
                error = %err,
                "Group mapping failed"
            );
            Error::from(err)
        })
    })
}

/// Installs the global tracing subscriber.
pub fn init_tracing(settings: &RuntimeSettings) {
    let filter = EnvFilter::new(&settings.log_level);

    match settings.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init(),
    }
}

//! # ptg-model
//!
//! Wire model for the pre-token-generation hook.
//!
//! ## Modules
//!
//! - [`event`] - Event envelope consumed from and returned to the issuance platform
//! - [`identity`] - Federated identity records and provider types

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod event;
pub mod identity;

pub use event::{
    ClaimsOverrideDetails, GroupConfiguration, GroupOverrideDetails, PreTokenGenerationEvent,
    PreTokenGenerationRequest, PreTokenGenerationResponse,
};
pub use identity::{Identity, ProviderType};

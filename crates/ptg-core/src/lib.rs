//! # ptg-core
//!
//! Configuration and error handling for the group claim mapper.
//!
//! This crate provides the foundational types shared by the mapper and the
//! hosting binary: the attribute-name configuration and the error kinds that
//! abort token issuance.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;

pub use config::GroupMappingConfig;
pub use error::{GroupMappingError, GroupMappingResult};

//! # ptg-mapper
//!
//! Maps the group attribute of a federated user into the group override
//! claim of the issued token.
//!
//! Each invocation runs one pass of locate, parse, merge and build:
//!
//! - [`locator`] - finds the raw group attribute and the identity provider type
//! - [`parser`] - decodes the raw attribute according to the provider's encoding
//! - [`merger`] - appends parsed groups after the groups already staged
//! - [`response`] - writes the override structure into the response section
//! - [`mapper`] - [`GroupClaimMapper`], the pipeline tying the stages together
//!
//! ## Example
//!
//! ```ignore
//! use ptg_core::GroupMappingConfig;
//! use ptg_mapper::GroupClaimMapper;
//!
//! let mapper = GroupClaimMapper::new(GroupMappingConfig::from_env()?);
//! let event = mapper.apply(event)?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod locator;
pub mod mapper;
pub mod merger;
pub mod parser;
pub mod response;

pub use locator::{locate_groups_attribute, resolve_provider_type};
pub use mapper::GroupClaimMapper;
pub use merger::merge_groups;
pub use parser::{parse_groups, GroupEncoding};
pub use response::build_response;

//! Opportunity domain for the partner selling toolkit
//!
//! The pipeline through this crate is: decode a raw JSON document into
//! [`document::OpportunityDocument`], map its optional sub-records into
//! typed fragments with [`mapper`], wrap them in an operation envelope
//! with [`assembler`], and hand the envelope to a [`ports::PartnerSellingPort`]
//! implementation. The [`services`] module ties those steps together and
//! enforces the update guard.

pub mod assembler;
pub mod document;
pub mod engagement;
pub mod error;
pub mod mapper;
pub mod model;
pub mod ports;
pub mod requests;
pub mod services;

pub use assembler::{assemble_create, assemble_update};
pub use document::{decode_document, DecodeError, OpportunityDocument};
pub use error::OpportunityError;
pub use mapper::{map_document, MappedFragments, MappingError};
pub use model::{Catalog, RelatedEntityType, ReviewStatus, Stage};
pub use ports::PartnerSellingPort;
pub use services::{EngagementService, OpportunityService};

//! AWS identifier handling
//!
//! This module turns Amazon Resource Names into the names tarn uses to pick
//! a resource browser. Everything here is pure: no network calls, no shared
//! mutable state, and lookup tables are built once and only ever read.
//!
//! # Module Structure
//!
//! - [`arn`] - Parses ARNs and splits the resource section into type and id
//! - [`normalize`] - Maps ARN service/type names onto registry naming
//! - [`parent_filter`] - Derives the parent filter for nested resources
//!
//! # Example
//!
//! ```
//! use tarn::aws::arn::{Arn, ArnExt};
//!
//! let arn = Arn::parse("arn:aws:ec2:us-east-1:123456789012:vpc/vpc-1234");
//! assert_eq!(
//!     arn.service_resource_type(),
//!     ("vpc".to_string(), "vpcs".to_string())
//! );
//!
//! // Invalid input is just "no ARN", every accessor still works
//! let missing = Arn::parse("not-an-arn");
//! assert!(!missing.can_navigate());
//! assert_eq!(missing.short_id(), "");
//! ```

pub mod arn;
pub mod normalize;
pub mod parent_filter;

pub use arn::{parse_arn, Arn, ArnExt};
pub use normalize::Navigability;
pub use parent_filter::ParentFilter;

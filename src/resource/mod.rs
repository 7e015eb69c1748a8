//! Resource abstraction layer
//!
//! This module describes the AWS resources tarn can browse. Resource
//! definitions are loaded from JSON files at compile time, so adding a
//! browsable resource type needs no code changes.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches resource definitions from embedded JSON
//! - [`filter`] - Scoping filters handed to a resource's data-access layer
//! - [`matcher`] - Prefix/fuzzy lookup of resource keys
//!
//! # Resource Definitions
//!
//! Resources are defined in JSON files under `src/resources/`, keyed by
//! `service/resource-type`:
//! - `compute.json` - EC2, VPC, ECS, Lambda, ELB, Auto Scaling
//! - `data.json` - S3, DynamoDB, RDS, Glue, Kinesis, Backup
//! - `security.json` - IAM, KMS, Secrets Manager, GuardDuty, Cognito, ...
//! - `integration.json` - SNS, SQS, EventBridge, Step Functions, CI/CD, ...
//!
//! # Example
//!
//! ```
//! use tarn::resource::get_resource;
//!
//! let functions = get_resource("lambda/functions").unwrap();
//! assert_eq!(functions.display_name, "Lambda Functions");
//! ```

pub mod filter;
pub mod matcher;
mod registry;

pub use filter::ResourceFilter;
pub use matcher::match_resource_keys;
pub use registry::*;

//! tarn - terminal ARN navigator for AWS
//!
//! Resolves Amazon Resource Names into the resource browser that shows
//! them, including the parent filter nested resources need.
//!
//! - [`aws`] - ARN parsing and normalization
//! - [`resource`] - Registry of browsable resources
//! - [`navigation`] - ARN to browser resolution
//! - [`report`] - Output rendering
//! - [`config`] - Persistent user configuration

pub mod aws;
pub mod config;
pub mod navigation;
pub mod report;
pub mod resource;

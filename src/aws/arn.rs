//! ARN Parsing
//!
//! Parses Amazon Resource Names (`arn:partition:service:region:account:resource`)
//! and extracts the resource type and id from the resource section, which
//! every service encodes a little differently.

use super::normalize::{self, Navigability};
use super::parent_filter::{self, ParentFilter};
use serde::Serialize;
use std::fmt;

/// Literal every ARN starts with
const ARN_PREFIX: &str = "arn:";

/// `:`-separated sections of an ARN, counting the `arn` literal
const ARN_SECTIONS: usize = 6;

/// A parsed Amazon Resource Name.
///
/// Only [`Arn::parse`] builds one, and fields are read-only afterwards.
/// `region` and `account_id` are empty for global resources such as S3
/// buckets or IAM roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arn {
    partition: String,
    service: String,
    region: String,
    account_id: String,
    resource_type: String,
    resource_id: String,
    raw: String,
}

/// Parse an ARN string, returning `None` if it is not an ARN.
pub fn parse_arn(input: &str) -> Option<Arn> {
    Arn::parse(input)
}

/// Cheap structural check: `arn:` prefix and enough sections.
pub fn is_arn(input: &str) -> bool {
    input.starts_with(ARN_PREFIX) && input.matches(':').count() >= ARN_SECTIONS - 1
}

impl Arn {
    /// Parse an ARN string into its components.
    ///
    /// The resource section is everything after the fifth colon, so colons
    /// and slashes inside it are kept.
    pub fn parse(input: &str) -> Option<Self> {
        if !is_arn(input) {
            tracing::trace!(input, "rejected: not an ARN");
            return None;
        }

        let sections: Vec<&str> = input.splitn(ARN_SECTIONS, ':').collect();
        let [_, partition, service, region, account_id, resource] = sections.as_slice() else {
            return None;
        };

        let (resource_type, resource_id) = split_resource(service, resource);

        Some(Self {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource_type,
            resource_id,
            raw: input.to_string(),
        })
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// The original ARN string, unmodified
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last `/` segment of the resource id, for compact display
    pub fn short_id(&self) -> &str {
        self.resource_id.rsplit('/').next().unwrap_or_default()
    }

    /// Registry service and resource type for this ARN
    pub fn service_resource_type(&self) -> (String, String) {
        normalize::service_resource_type(&self.service, &self.resource_type)
    }

    /// How confident we are that a browser exists for this ARN
    pub fn navigability(&self) -> Navigability {
        let (service, resource_type) = self.service_resource_type();
        if service.is_empty() || resource_type.is_empty() {
            Navigability::None
        } else if normalize::has_explicit_type(&self.service, &self.resource_type) {
            Navigability::Explicit
        } else {
            Navigability::Inferred
        }
    }

    pub fn can_navigate(&self) -> bool {
        self.navigability().is_navigable()
    }

    /// Filter needed to fetch this resource in its parent's context.
    /// Empty when no parent relationship applies.
    pub fn parent_filter(&self) -> ParentFilter {
        parent_filter::extract(self)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Accessors that also work on a failed parse.
///
/// Implemented for `Option<Arn>` and `Option<&Arn>` so the result of
/// [`Arn::parse`] can be queried directly. On `None` every accessor returns
/// its zero value.
pub trait ArnExt {
    fn as_arn(&self) -> Option<&Arn>;

    fn raw(&self) -> &str {
        self.as_arn().map_or("", |arn| arn.raw())
    }

    fn short_id(&self) -> &str {
        self.as_arn().map_or("", |arn| arn.short_id())
    }

    fn service_resource_type(&self) -> (String, String) {
        self.as_arn()
            .map(|arn| arn.service_resource_type())
            .unwrap_or_default()
    }

    fn navigability(&self) -> Navigability {
        self.as_arn()
            .map_or(Navigability::None, |arn| arn.navigability())
    }

    fn can_navigate(&self) -> bool {
        self.as_arn().is_some_and(|arn| arn.can_navigate())
    }

    fn parent_filter(&self) -> ParentFilter {
        self.as_arn()
            .map(|arn| arn.parent_filter())
            .unwrap_or_default()
    }
}

impl ArnExt for Option<Arn> {
    fn as_arn(&self) -> Option<&Arn> {
        self.as_ref()
    }
}

impl ArnExt for Option<&Arn> {
    fn as_arn(&self) -> Option<&Arn> {
        *self
    }
}

/// Split the resource section into (resource type, resource id).
///
/// Handles the common encodings:
/// - `type/id` (ec2, ecs, iam), nested ids keep their slashes: `service/cluster/name`
/// - `type:id` (lambda, rds, logs), even when the id has slashes: `log-group:/aws/lambda/fn`
/// - bare `id` (s3, sns, sqs), with the type inferred from the service
///
/// Whichever separator comes first wins. A colon only loses when a slash
/// precedes it.
fn split_resource(service: &str, resource: &str) -> (String, String) {
    if resource.is_empty() {
        return (String::new(), String::new());
    }

    let slash = resource.find('/');
    let colon = resource.find(':');

    match (colon, slash) {
        (Some(c), None) => (resource[..c].to_string(), resource[c + 1..].to_string()),
        (Some(c), Some(s)) if c < s => (resource[..c].to_string(), resource[c + 1..].to_string()),
        (_, Some(s)) => (resource[..s].to_string(), resource[s + 1..].to_string()),
        (None, None) => (
            infer_resource_type(service).to_string(),
            resource.to_string(),
        ),
    }
}

/// Resource type for services whose ARNs carry only the resource name
fn infer_resource_type(service: &str) -> &'static str {
    match service {
        "s3" => "bucket",
        "sns" => "topic",
        "sqs" => "queue",
        "dynamodb" => "table",
        "events" => "event-bus",
        _ => "",
    }
}

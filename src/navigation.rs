//! Navigation
//!
//! Resolves an ARN into the resource browser to open: which registry entry,
//! which resource id, and the parent filter the data-access `Get` must be
//! scoped with.

use crate::aws::arn::{Arn, ArnExt};
use crate::aws::normalize::Navigability;
use crate::resource::{get_resource, ResourceFilter};
use serde::Serialize;

/// Where an ARN leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationTarget {
    /// Registry key, `service/resource-type`
    pub resource_key: String,
    pub display_name: String,
    pub resource_id: String,
    pub short_id: String,
    pub filters: Vec<ResourceFilter>,
    pub navigability: Navigability,
    /// The registry has a browser for `resource_key`
    pub registered: bool,
    /// The browser needs a parent filter the ARN does not carry
    pub missing_parent: bool,
}

impl NavigationTarget {
    /// Registered and fetchable without extra context
    pub fn is_complete(&self) -> bool {
        self.registered && !self.missing_parent
    }
}

/// Resolve a parsed ARN to a navigation target.
///
/// Returns `None` for a missing ARN or one that is not navigable.
pub fn resolve(arn: Option<&Arn>) -> Option<NavigationTarget> {
    let navigability = arn.navigability();
    if !navigability.is_navigable() {
        return None;
    }
    let arn = arn?;

    let (service, resource_type) = arn.service_resource_type();
    let resource_key = format!("{}/{}", service, resource_type);
    let parent = arn.parent_filter();
    let resource = get_resource(&resource_key);

    let missing_parent = match resource.and_then(|r| r.parent_filter.as_deref()) {
        Some(required) => parent.key != required,
        None => false,
    };

    if resource.is_none() {
        tracing::warn!("No browser registered for {} ({})", resource_key, arn);
    } else if missing_parent {
        tracing::warn!(
            "{} needs a parent filter that {} does not provide",
            resource_key,
            arn
        );
    }

    let target = NavigationTarget {
        display_name: resource
            .map(|r| r.display_name.clone())
            .unwrap_or_else(|| resource_key.clone()),
        resource_key,
        resource_id: arn.resource_id().to_string(),
        short_id: arn.short_id().to_string(),
        filters: parent.into_resource_filter().into_iter().collect(),
        navigability,
        registered: resource.is_some(),
        missing_parent,
    };

    tracing::debug!(
        "Resolved {} -> {} (filters: {:?})",
        arn,
        target.resource_key,
        target.filters
    );

    Some(target)
}

/// Parse and resolve in one step
pub fn resolve_str(input: &str) -> Option<NavigationTarget> {
    resolve(Arn::parse(input).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_simple_resource() {
        let target =
            resolve_str("arn:aws:lambda:us-east-1:123456789012:function:my-func").unwrap();
        assert_eq!(target.resource_key, "lambda/functions");
        assert_eq!(target.display_name, "Lambda Functions");
        assert_eq!(target.resource_id, "my-func");
        assert!(target.filters.is_empty());
        assert!(target.is_complete());
    }

    #[test]
    fn test_resolve_nested_resource_with_parent() {
        let target =
            resolve_str("arn:aws:glue:us-east-1:123456789012:table/sales/orders").unwrap();
        assert_eq!(target.resource_key, "glue/tables");
        assert_eq!(target.short_id, "orders");
        assert_eq!(
            target.filters,
            vec![ResourceFilter::new("DatabaseName", vec!["sales".to_string()])]
        );
        assert!(!target.missing_parent);
    }

    #[test]
    fn test_resolve_missing_parent() {
        let target =
            resolve_str("arn:aws:backup:us-east-1:123456789012:recovery-point:rp-abc123").unwrap();
        assert_eq!(target.resource_key, "backup/recovery-points");
        assert!(target.registered);
        assert!(target.missing_parent);
        assert!(!target.is_complete());
    }

    #[test]
    fn test_resolve_unregistered_inferred() {
        let target =
            resolve_str("arn:aws:unknown:us-east-1:123456789012:thing/my-thing").unwrap();
        assert_eq!(target.resource_key, "unknown/things");
        assert_eq!(target.display_name, "unknown/things");
        assert_eq!(target.navigability, Navigability::Inferred);
        assert!(!target.registered);
    }

    #[test]
    fn test_resolve_not_navigable() {
        assert!(resolve_str("not-an-arn").is_none());
        assert!(resolve_str("arn:aws:mystery:us-east-1:123456789012:thing").is_none());
        assert!(resolve(None).is_none());
    }
}

//! Resource Registry - Load resource definitions from JSON
//!
//! This module loads all AWS resource definitions from embedded JSON files
//! and provides lookup functions for the rest of the application.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[
    include_str!("../resources/compute.json"),
    include_str!("../resources/data.json"),
    include_str!("../resources/security.json"),
    include_str!("../resources/integration.json"),
];

/// Resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub display_name: String,
    pub service: String,
    /// Filter the data-access `Get` requires from the parent resource
    #[serde(default)]
    pub parent_filter: Option<String>,
    /// Resource is not scoped to a region
    #[serde(default)]
    pub is_global: bool,
}

impl ResourceDef {
    pub fn requires_parent(&self) -> bool {
        self.parent_filter.is_some()
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub resources: HashMap<String, ResourceDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<ResourceConfig> = OnceLock::new();

/// Get the resource registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static ResourceConfig {
    REGISTRY.get_or_init(|| {
        let mut final_config = ResourceConfig {
            resources: HashMap::new(),
        };

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));
            final_config.resources.extend(partial.resources);
        }

        tracing::debug!("Loaded {} resource definitions", final_config.resources.len());
        final_config
    })
}

/// Get a resource definition by key (`service/resource-type`)
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_registry().resources.get(key)
}

/// Get all resource keys, sorted
pub fn get_all_resource_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = get_registry()
        .resources
        .keys()
        .map(|s| s.as_str())
        .collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aws::arn::Arn;

    #[test]
    fn test_registry_loads_successfully() {
        let registry = get_registry();
        assert!(
            !registry.resources.is_empty(),
            "Registry should have resources"
        );
    }

    #[test]
    fn test_lambda_functions_resource_exists() {
        let resource = get_resource("lambda/functions");
        assert!(resource.is_some(), "Lambda functions resource should exist");

        let resource = resource.unwrap();
        assert_eq!(resource.display_name, "Lambda Functions");
        assert_eq!(resource.service, "lambda");
        assert!(!resource.requires_parent());
    }

    #[test]
    fn test_keys_match_service_field() {
        for (key, resource) in &get_registry().resources {
            let (service, resource_type) = key
                .split_once('/')
                .unwrap_or_else(|| panic!("{key} should be service/resource-type"));
            assert_eq!(service, resource.service, "{key}");
            assert!(!resource_type.is_empty(), "{key}");
        }
    }

    #[test]
    fn test_get_all_resource_keys_sorted() {
        let keys = get_all_resource_keys();
        assert!(keys.contains(&"s3/buckets"));
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_nested_resources_declare_parent_filter() {
        assert_eq!(
            get_resource("glue/tables").and_then(|r| r.parent_filter.as_deref()),
            Some("DatabaseName")
        );
        assert_eq!(
            get_resource("guardduty/findings").and_then(|r| r.parent_filter.as_deref()),
            Some("DetectorId")
        );
    }

    #[test]
    fn test_explicitly_mapped_arns_are_registered() {
        let arns = [
            "arn:aws:ec2:us-east-1:123456789012:instance/i-1",
            "arn:aws:ec2:us-east-1:123456789012:vpc-endpoint/vpce-1",
            "arn:aws:s3:::bucket",
            "arn:aws:rds:us-east-1:123456789012:db:main",
            "arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn",
            "arn:aws:states:us-east-1:123456789012:stateMachine:sm",
            "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/alb/1",
            "arn:aws:autoscaling:us-east-1:123456789012:autoScalingGroup:uuid:autoScalingGroupName/asg",
            "arn:aws:config:us-east-1:123456789012:config-rule/config-rule-1",
            "arn:aws:organizations::123456789012:ou/o-1/ou-1",
        ];
        for input in arns {
            let (service, resource_type) = Arn::parse(input).unwrap().service_resource_type();
            let key = format!("{service}/{resource_type}");
            assert!(get_resource(&key).is_some(), "{input} -> {key} not registered");
        }
    }
}

//! Service and resource type normalization
//!
//! ARN names are the provider's: singular, sometimes camelCase, and with a
//! few services known under a different name than tarn's registry uses.
//! This module maps them onto registry keys (`service/resource-types`).

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

type Table = HashMap<&'static str, &'static str>;

/// ARN services that the registry knows under another name
const SERVICE_ALIASES: &[(&str, &str)] = &[
    ("logs", "cloudwatch"),
    ("states", "stepfunctions"),
    ("elasticloadbalancing", "elbv2"),
    ("execute-api", "apigateway"),
    ("config", "configservice"),
    ("access-analyzer", "accessanalyzer"),
];

/// EC2 resource types browsed under the `vpc` service
const VPC_RESOURCE_TYPES: &[&str] = &[
    "vpc",
    "subnet",
    "route-table",
    "internet-gateway",
    "nat-gateway",
    "vpc-endpoint",
    "transit-gateway",
];

/// Explicit `arn-service/arn-type` to registry resource type mappings
const RESOURCE_TYPES: &[(&str, &str)] = &[
    ("ec2/instance", "instances"),
    ("ec2/volume", "volumes"),
    ("ec2/security-group", "security-groups"),
    ("ec2/elastic-ip", "elastic-ips"),
    ("ec2/key-pair", "key-pairs"),
    ("ec2/image", "images"),
    ("ec2/snapshot", "snapshots"),
    ("ec2/launch-template", "launch-templates"),
    ("ec2/capacity-reservation", "capacity-reservations"),
    ("ec2/vpc", "vpcs"),
    ("ec2/subnet", "subnets"),
    ("ec2/route-table", "route-tables"),
    ("ec2/internet-gateway", "internet-gateways"),
    ("ec2/nat-gateway", "nat-gateways"),
    ("ec2/vpc-endpoint", "endpoints"),
    ("ec2/transit-gateway", "transit-gateways"),
    ("lambda/function", "functions"),
    ("ecs/cluster", "clusters"),
    ("ecs/service", "services"),
    ("ecs/task", "tasks"),
    ("ecs/task-definition", "task-definitions"),
    ("ecs/container-instance", "container-instances"),
    ("s3/bucket", "buckets"),
    ("rds/db", "instances"),
    ("rds/cluster", "clusters"),
    ("rds/snapshot", "snapshots"),
    ("iam/user", "users"),
    ("iam/role", "roles"),
    ("iam/policy", "policies"),
    ("iam/group", "groups"),
    ("iam/instance-profile", "instance-profiles"),
    ("dynamodb/table", "tables"),
    ("sns/topic", "topics"),
    ("sqs/queue", "queues"),
    ("logs/log-group", "log-groups"),
    ("states/stateMachine", "state-machines"),
    ("states/execution", "executions"),
    ("secretsmanager/secret", "secrets"),
    ("kms/key", "keys"),
    ("events/event-bus", "buses"),
    ("events/rule", "rules"),
    ("apigateway/restapis", "rest-apis"),
    ("cloudformation/stack", "stacks"),
    ("autoscaling/autoScalingGroup", "groups"),
    ("elasticloadbalancing/loadbalancer", "load-balancers"),
    ("elasticloadbalancing/targetgroup", "target-groups"),
    ("elasticloadbalancing/app", "load-balancers"),
    ("elasticloadbalancing/net", "load-balancers"),
    ("ecr/repository", "repositories"),
    ("kinesis/stream", "streams"),
    ("glue/database", "databases"),
    ("glue/table", "tables"),
    ("glue/crawler", "crawlers"),
    ("glue/job", "jobs"),
    ("bedrock/foundation-model", "foundation-models"),
    ("bedrock/inference-profile", "inference-profiles"),
    ("bedrock/guardrail", "guardrails"),
    ("bedrock-agent/agent", "agents"),
    ("bedrock-agent/knowledge-base", "knowledge-bases"),
    ("bedrock-agent/flow", "flows"),
    ("bedrock-agentcore/runtime", "runtimes"),
    ("route53/hostedzone", "hosted-zones"),
    ("cloudfront/distribution", "distributions"),
    ("acm/certificate", "certificates"),
    ("ssm/parameter", "parameters"),
    ("cognito-idp/userpool", "user-pools"),
    ("guardduty/detector", "detectors"),
    ("config/config-rule", "rules"),
    ("backup/backup-vault", "vaults"),
    ("backup/backup-plan", "plans"),
    ("organizations/account", "accounts"),
    ("organizations/ou", "ous"),
];

static SERVICE_TABLE: OnceLock<Table> = OnceLock::new();
static RESOURCE_TYPE_TABLE: OnceLock<Table> = OnceLock::new();

fn service_table() -> &'static Table {
    SERVICE_TABLE.get_or_init(|| SERVICE_ALIASES.iter().copied().collect())
}

fn resource_type_table() -> &'static Table {
    RESOURCE_TYPE_TABLE.get_or_init(|| RESOURCE_TYPES.iter().copied().collect())
}

/// Whether the UI should offer to browse a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigability {
    /// Missing service or resource type
    None,
    /// The type has an explicit registry mapping
    Explicit,
    /// Only the pluralized fallback applies; the browser may not exist
    Inferred,
}

impl Navigability {
    pub fn is_navigable(self) -> bool {
        self != Navigability::None
    }
}

/// Normalize an ARN service/type pair into registry naming
pub fn service_resource_type(arn_service: &str, arn_type: &str) -> (String, String) {
    (
        normalize_service(arn_service, arn_type),
        normalize_resource_type(arn_service, arn_type),
    )
}

pub fn normalize_service(arn_service: &str, resource_type: &str) -> String {
    if arn_service == "ec2" && is_vpc_resource(resource_type) {
        return "vpc".to_string();
    }
    service_table()
        .get(arn_service)
        .copied()
        .unwrap_or(arn_service)
        .to_string()
}

fn is_vpc_resource(resource_type: &str) -> bool {
    VPC_RESOURCE_TYPES.contains(&resource_type)
}

/// Map an ARN resource type to the registry's plural kebab-case type.
/// Unmapped types are pluralized.
pub fn normalize_resource_type(arn_service: &str, arn_type: &str) -> String {
    if let Some(mapped) = resource_type_table().get(type_key(arn_service, arn_type).as_str()) {
        return mapped.to_string();
    }
    pluralize(arn_type)
}

/// True if `arn_service/arn_type` has an explicit mapping
pub fn has_explicit_type(arn_service: &str, arn_type: &str) -> bool {
    resource_type_table().contains_key(type_key(arn_service, arn_type).as_str())
}

fn type_key(service: &str, resource_type: &str) -> String {
    format!("{}/{}", service, resource_type)
}

fn pluralize(word: &str) -> String {
    if word.is_empty() || word.ends_with('s') {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('y') {
        format!("{}ies", stem)
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("widget"), "widgets");
        assert_eq!(pluralize("policy"), "policies");
        assert_eq!(pluralize("things"), "things");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_unlisted_types_fall_back_to_pluralization() {
        assert_eq!(normalize_resource_type("service", "widget"), "widgets");
        assert_eq!(normalize_resource_type("service", "policy"), "policies");
        assert_eq!(normalize_resource_type("service", "things"), "things");
        assert_eq!(normalize_resource_type("service", ""), "");
    }

    #[test]
    fn test_explicit_mappings() {
        assert_eq!(normalize_resource_type("rds", "db"), "instances");
        assert_eq!(normalize_resource_type("states", "stateMachine"), "state-machines");
        assert_eq!(normalize_resource_type("autoscaling", "autoScalingGroup"), "groups");
        assert_eq!(normalize_resource_type("ec2", "vpc-endpoint"), "endpoints");
        assert_eq!(normalize_resource_type("events", "event-bus"), "buses");
    }

    #[test]
    fn test_vpc_resources_move_to_vpc_service() {
        for resource_type in VPC_RESOURCE_TYPES {
            assert_eq!(normalize_service("ec2", resource_type), "vpc", "{resource_type}");
        }
        assert_eq!(normalize_service("ec2", "instance"), "ec2");
        assert_eq!(normalize_service("ec2", "security-group"), "ec2");
    }

    #[test]
    fn test_vpc_types_only_remap_for_ec2() {
        assert_eq!(normalize_service("other", "vpc"), "other");
    }

    #[test]
    fn test_service_aliases() {
        assert_eq!(normalize_service("logs", "log-group"), "cloudwatch");
        assert_eq!(normalize_service("states", "stateMachine"), "stepfunctions");
        assert_eq!(normalize_service("elasticloadbalancing", "app"), "elbv2");
        assert_eq!(normalize_service("lambda", "function"), "lambda");
    }

    #[test]
    fn test_explicit_table_size() {
        assert_eq!(resource_type_table().len(), RESOURCE_TYPES.len());
        assert!(has_explicit_type("lambda", "function"));
        assert!(!has_explicit_type("lambda", "layer"));
    }

    #[test]
    fn test_navigability_is_navigable() {
        assert!(!Navigability::None.is_navigable());
        assert!(Navigability::Explicit.is_navigable());
        assert!(Navigability::Inferred.is_navigable());
    }
}

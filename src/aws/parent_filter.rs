//! Parent filter extraction
//!
//! Some resources can only be fetched through their parent: a GuardDuty
//! finding needs its detector id, a Glue table needs its database. When the
//! parent is encoded in the ARN we can recover it here, keyed by the ARN's
//! own `service/resource-type`.

use super::arn::Arn;
use crate::resource::ResourceFilter;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Filter key and value a data-access `Get` needs for a nested resource.
///
/// The default value (both fields empty) means "no parent filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParentFilter {
    pub key: String,
    pub value: String,
}

impl ParentFilter {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }

    /// Convert into a resource filter, if there is anything to filter on
    pub fn into_resource_filter(self) -> Option<ResourceFilter> {
        if self.is_empty() {
            return None;
        }
        Some(ResourceFilter::new(&self.key, vec![self.value]))
    }
}

/// How to pull the parent out of a resource id
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Id up to `marker`; nothing if the marker is missing
    Before {
        key: &'static str,
        marker: &'static str,
    },
    /// Id up to the first `/`, or the whole id
    HeadOrWhole { key: &'static str },
    /// Parent addressed by its own ARN, rebuilt from the id up to `marker`
    ParentArn {
        key: &'static str,
        marker: &'static str,
        resource_prefix: &'static str,
    },
    /// The parent is never part of the ARN
    Unavailable,
}

const RULES: &[(&str, Rule)] = &[
    // detector-id/finding/finding-id
    (
        "guardduty/detector",
        Rule::Before {
            key: "DetectorId",
            marker: "/finding/",
        },
    ),
    // database-name/table-name
    (
        "glue/table",
        Rule::Before {
            key: "DatabaseName",
            marker: "/",
        },
    ),
    // job-name or job-name/run/run-id
    ("glue/job", Rule::HeadOrWhole { key: "JobName" }),
    // server-id/user-name
    (
        "transfer/user",
        Rule::Before {
            key: "ServerId",
            marker: "/",
        },
    ),
    // project-name:build-id
    (
        "codebuild/build",
        Rule::Before {
            key: "ProjectName",
            marker: ":",
        },
    ),
    ("codepipeline/pipeline", Rule::HeadOrWhole { key: "PipelineName" }),
    // cluster-id or cluster-id/step/step-id
    ("elasticmapreduce/cluster", Rule::HeadOrWhole { key: "ClusterId" }),
    // repo-name or repo-name/image/sha256:...
    ("ecr/repository", Rule::HeadOrWhole { key: "RepositoryName" }),
    // pool-id or pool-id/user/username
    ("cognito-idp/userpool", Rule::HeadOrWhole { key: "UserPoolId" }),
    // analyzer-name/finding/finding-id
    (
        "access-analyzer/analyzer",
        Rule::ParentArn {
            key: "AnalyzerArn",
            marker: "/finding/",
            resource_prefix: "analyzer/",
        },
    ),
    // graph-id/investigation/investigation-id
    (
        "detective/graph",
        Rule::ParentArn {
            key: "GraphArn",
            marker: "/investigation/",
            resource_prefix: "graph:",
        },
    ),
    // recovery-point:rp-id, vault name is not in the ARN
    ("backup/recovery-point", Rule::Unavailable),
    // plan-id or plan-id/selection/selection-id
    ("backup/backup-plan", Rule::HeadOrWhole { key: "BackupPlanId" }),
];

static RULE_TABLE: OnceLock<HashMap<&'static str, Rule>> = OnceLock::new();

fn rules() -> &'static HashMap<&'static str, Rule> {
    RULE_TABLE.get_or_init(|| RULES.iter().copied().collect())
}

/// Extract the parent filter for an ARN.
///
/// Returns an empty filter when the ARN's service/type has no rule, or the
/// rule cannot find the parent in the resource id.
pub fn extract(arn: &Arn) -> ParentFilter {
    if arn.resource_id().is_empty() {
        return ParentFilter::default();
    }

    let lookup_key = format!("{}/{}", arn.service(), arn.resource_type());
    rules()
        .get(lookup_key.as_str())
        .and_then(|rule| rule.apply(arn))
        .unwrap_or_default()
}

impl Rule {
    fn apply(self, arn: &Arn) -> Option<ParentFilter> {
        let id = arn.resource_id();
        match self {
            Rule::Before { key, marker } => {
                let (parent, _) = id.split_once(marker)?;
                Some(ParentFilter::new(key, parent))
            }
            Rule::HeadOrWhole { key } => {
                let parent = id.split_once('/').map_or(id, |(head, _)| head);
                Some(ParentFilter::new(key, parent))
            }
            Rule::ParentArn {
                key,
                marker,
                resource_prefix,
            } => {
                let (parent, _) = id.split_once(marker)?;
                let parent_arn = format!(
                    "arn:{}:{}:{}:{}:{}{}",
                    arn.partition(),
                    arn.service(),
                    arn.region(),
                    arn.account_id(),
                    resource_prefix,
                    parent
                );
                Some(ParentFilter::new(key, &parent_arn))
            }
            Rule::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_for(input: &str) -> ParentFilter {
        Arn::parse(input)
            .expect("test input should be an ARN")
            .parent_filter()
    }

    #[test]
    fn test_parent_filters() {
        let cases = [
            (
                "arn:aws:guardduty:us-east-1:123456789012:detector/abc123def456/finding/xyz789",
                "DetectorId",
                "abc123def456",
            ),
            (
                "arn:aws:glue:us-east-1:123456789012:table/my-database/my-table",
                "DatabaseName",
                "my-database",
            ),
            (
                "arn:aws:glue:us-east-1:123456789012:job/my-job-name",
                "JobName",
                "my-job-name",
            ),
            (
                "arn:aws:glue:us-east-1:123456789012:job/my-job/run/jr_123",
                "JobName",
                "my-job",
            ),
            (
                "arn:aws:transfer:us-east-1:123456789012:user/s-abc123/myuser",
                "ServerId",
                "s-abc123",
            ),
            (
                "arn:aws:codebuild:us-east-1:123456789012:build/my-project:abc-123-def",
                "ProjectName",
                "my-project",
            ),
            (
                "arn:aws:elasticmapreduce:us-east-1:123456789012:cluster/j-ABC123DEF",
                "ClusterId",
                "j-ABC123DEF",
            ),
            (
                "arn:aws:ecr:us-east-1:123456789012:repository/my-repo",
                "RepositoryName",
                "my-repo",
            ),
            (
                "arn:aws:cognito-idp:us-east-1:123456789012:userpool/us-east-1_ABC123",
                "UserPoolId",
                "us-east-1_ABC123",
            ),
            (
                "arn:aws:codepipeline:us-east-1:123456789012:pipeline/my-pipeline",
                "PipelineName",
                "my-pipeline",
            ),
            (
                "arn:aws:backup:us-east-1:123456789012:backup-plan/abc-123-def",
                "BackupPlanId",
                "abc-123-def",
            ),
        ];

        for (input, key, value) in cases {
            assert_eq!(filter_for(input), ParentFilter::new(key, value), "{input}");
        }
    }

    #[test]
    fn test_parent_arn_rebuilt_for_access_analyzer() {
        let filter = filter_for(
            "arn:aws:access-analyzer:us-west-2:123456789012:analyzer/my-analyzer/finding/f-1",
        );
        assert_eq!(filter.key, "AnalyzerArn");
        assert_eq!(
            filter.value,
            "arn:aws:access-analyzer:us-west-2:123456789012:analyzer/my-analyzer"
        );
    }

    #[test]
    fn test_parent_arn_rebuilt_for_detective() {
        let filter = filter_for(
            "arn:aws:detective:us-east-1:123456789012:graph:abc123/investigation/inv-1",
        );
        assert_eq!(filter.key, "GraphArn");
        assert_eq!(filter.value, "arn:aws:detective:us-east-1:123456789012:graph:abc123");
    }

    #[test]
    fn test_no_parent_filter() {
        for input in [
            "arn:aws:ec2:us-east-1:123456789012:instance/i-1234567890abcdef0",
            "arn:aws:lambda:us-east-1:123456789012:function:my-function",
            "arn:aws:s3:::my-bucket",
            "arn:aws:backup:us-east-1:123456789012:recovery-point:rp-abc123",
            // marker missing
            "arn:aws:guardduty:us-east-1:123456789012:detector/abc123",
            "arn:aws:access-analyzer:us-east-1:123456789012:analyzer/my-analyzer",
            // empty resource id
            "arn:aws:glue:us-east-1:123456789012:job/",
        ] {
            assert!(filter_for(input).is_empty(), "{input}");
        }
    }

    #[test]
    fn test_into_resource_filter() {
        assert!(ParentFilter::default().into_resource_filter().is_none());

        let filter = ParentFilter::new("DetectorId", "abc")
            .into_resource_filter()
            .unwrap();
        assert_eq!(filter.param, "DetectorId");
        assert_eq!(filter.values, vec!["abc".to_string()]);
    }
}

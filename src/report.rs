//! Resolution reports
//!
//! Collects everything tarn knows about an input string and renders it as
//! an aligned table, JSON or YAML.

use crate::aws::arn::{Arn, ArnExt};
use crate::aws::normalize::Navigability;
use crate::aws::parent_filter::ParentFilter;
use crate::navigation::{self, NavigationTarget};
use crate::resource::{get_resource, ResourceFilter};
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Account id shown instead of the real one in demo mode
pub const DEMO_ACCOUNT_ID: &str = "123456789012";

/// Placeholder for empty values in table output
const EMPTY: &str = "-";

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Everything resolved from one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub valid: bool,
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource_type: String,
    pub resource_id: String,
    pub short_id: String,
    pub canonical_service: String,
    pub canonical_type: String,
    pub navigability: Navigability,
    #[serde(skip_serializing_if = "ParentFilter::is_empty")]
    pub parent_filter: ParentFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<NavigationTarget>,
}

impl Report {
    /// Parse `input` and build its report. Input that is not an ARN gives a
    /// report with `valid: false` and empty fields.
    pub fn new(input: &str) -> Self {
        Self::from_arn(input, Arn::parse(input).as_ref())
    }

    pub fn from_arn(input: &str, arn: Option<&Arn>) -> Self {
        let (canonical_service, canonical_type) = arn.service_resource_type();
        let field = |get: fn(&Arn) -> &str| arn.map(get).unwrap_or_default().to_string();

        Self {
            input: input.to_string(),
            valid: arn.is_some(),
            partition: field(Arn::partition),
            service: field(Arn::service),
            region: field(Arn::region),
            account_id: field(Arn::account_id),
            resource_type: field(Arn::resource_type),
            resource_id: field(Arn::resource_id),
            short_id: arn.short_id().to_string(),
            canonical_service,
            canonical_type,
            navigability: arn.navigability(),
            parent_filter: arn.parent_filter(),
            target: navigation::resolve(arn),
        }
    }

    /// Replace the account id everywhere it appears (demo mode)
    pub fn masked(mut self) -> Self {
        if self.account_id.is_empty() {
            return self;
        }
        self.input = mask_account(&self.input);
        self.account_id = DEMO_ACCOUNT_ID.to_string();
        self.parent_filter.value = mask_account(&self.parent_filter.value);
        if let Some(target) = &mut self.target {
            for filter in &mut target.filters {
                filter.values = filter.values.iter().map(|v| mask_account(v)).collect();
            }
        }
        self
    }
}

/// Mask the account section of an ARN; other strings are returned as is
fn mask_account(value: &str) -> String {
    if !value.starts_with("arn:") {
        return value.to_string();
    }
    let mut sections: Vec<&str> = value.splitn(6, ':').collect();
    if sections.len() == 6 && !sections[4].is_empty() {
        sections[4] = DEMO_ACCOUNT_ID;
    }
    sections.join(":")
}

/// Render reports in the requested format
pub fn render(reports: &[Report], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(reports)?),
    }
}

fn or_empty(value: &str) -> &str {
    if value.is_empty() {
        EMPTY
    } else {
        value
    }
}

fn render_table(reports: &[Report]) -> String {
    reports
        .iter()
        .map(render_report)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_report(report: &Report) -> String {
    let mut rows: Vec<(&str, String)> = vec![("ARN", report.input.clone())];

    if !report.valid {
        rows.push(("Valid", "no".to_string()));
        return format_rows(&rows);
    }

    rows.extend([
        ("Partition", or_empty(&report.partition).to_string()),
        ("Service", or_empty(&report.service).to_string()),
        ("Region", or_empty(&report.region).to_string()),
        ("Account", or_empty(&report.account_id).to_string()),
        ("Type", or_empty(&report.resource_type).to_string()),
        ("Resource ID", or_empty(&report.resource_id).to_string()),
        ("Short ID", or_empty(&report.short_id).to_string()),
    ]);

    let navigable = match report.navigability {
        Navigability::None => "no",
        Navigability::Explicit => "yes",
        Navigability::Inferred => "probably",
    };
    rows.push(("Navigable", navigable.to_string()));

    if let Some(target) = &report.target {
        let mut browser = format!("{} ({})", target.resource_key, target.display_name);
        if !target.registered {
            browser.push_str(" [not registered]");
        } else if target.missing_parent {
            browser.push_str(" [needs parent]");
        }
        rows.push(("Browser", browser));

        let filters: Vec<String> = target.filters.iter().map(ResourceFilter::to_string).collect();
        rows.push(("Filter", or_empty(&filters.join(" ")).to_string()));
    }

    format_rows(&rows)
}

fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}\n", label, value, width = width))
        .collect()
}

/// A registry entry, as listed by `tarn resources`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    pub key: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_filter: Option<String>,
    pub is_global: bool,
}

impl ResourceEntry {
    pub fn from_key(key: &str) -> Option<Self> {
        let resource = get_resource(key)?;
        Some(Self {
            key: key.to_string(),
            display_name: resource.display_name.clone(),
            parent_filter: resource.parent_filter.clone(),
            is_global: resource.is_global,
        })
    }
}

/// Render registry entries in the requested format
pub fn render_resources(entries: &[ResourceEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(entries)?),
        OutputFormat::Table => {
            let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);
            Ok(entries
                .iter()
                .map(|entry| {
                    let mut line = format!("{:<width$}  {}", entry.key, entry.display_name, width = width);
                    if let Some(parent) = &entry.parent_filter {
                        line.push_str(&format!(" (requires {})", parent));
                    }
                    line.push('\n');
                    line
                })
                .collect())
        }
    }
}

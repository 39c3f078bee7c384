//! Discovery API contracts (public, stable)
//!
//! All three types validate on construction and on deserialization, and are
//! immutable afterwards: fields are private and no mutating methods exist,
//! so post-construction assignment does not compile. Optional filters keep
//! the absent-vs-empty distinction; `None` means "filter not specified" and
//! is never collapsed into an empty list.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::error::{contract_validation, ArchError, Result};
use crate::model::Application;

fn validate_elements(field: &str, values: &[String]) -> Result<()> {
    for (index, value) in values.iter().enumerate() {
        if value.trim().is_empty() {
            return Err(contract_validation(format!(
                "{field}[{index}] must be a non-empty string"
            )));
        }
    }
    Ok(())
}

/// Request to discover cloud resources (public API contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDiscoveryRequest")]
pub struct DiscoveryRequest {
    /// Provider subscription IDs to scan
    subscriptions: Vec<String>,
    /// Optional list of resource groups to filter
    resource_groups: Option<Vec<String>>,
    /// Optional list of tags to filter by
    required_tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawDiscoveryRequest {
    subscriptions: Vec<String>,
    #[serde(default)]
    resource_groups: Option<Vec<String>>,
    #[serde(default)]
    required_tags: Option<Vec<String>>,
}

impl TryFrom<RawDiscoveryRequest> for DiscoveryRequest {
    type Error = ArchError;

    fn try_from(raw: RawDiscoveryRequest) -> Result<Self> {
        DiscoveryRequest::new(raw.subscriptions, raw.resource_groups, raw.required_tags)
    }
}

impl DiscoveryRequest {
    /// Build a validated request. List elements must be non-empty strings;
    /// an empty `subscriptions` list itself is accepted.
    pub fn new(
        subscriptions: Vec<String>,
        resource_groups: Option<Vec<String>>,
        required_tags: Option<Vec<String>>,
    ) -> Result<Self> {
        validate_elements("subscriptions", &subscriptions)?;
        if let Some(groups) = &resource_groups {
            validate_elements("resource_groups", groups)?;
        }
        if let Some(tags) = &required_tags {
            validate_elements("required_tags", tags)?;
        }

        Ok(DiscoveryRequest {
            subscriptions,
            resource_groups,
            required_tags,
        })
    }

    pub fn subscriptions(&self) -> &[String] {
        &self.subscriptions
    }

    pub fn resource_groups(&self) -> Option<&[String]> {
        self.resource_groups.as_deref()
    }

    pub fn required_tags(&self) -> Option<&[String]> {
        self.required_tags.as_deref()
    }
}

/// Summary of a discovered application (public API contract)
///
/// A lossy projection of an internal [`Application`]: raw resources and raw
/// tags are deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawApplicationSummary")]
pub struct ApplicationSummary {
    name: String,
    resource_count: usize,
    compliance_percentage: f64,
    cost_monthly: Option<f64>,
}

#[derive(Deserialize)]
struct RawApplicationSummary {
    name: String,
    resource_count: usize,
    compliance_percentage: f64,
    #[serde(default)]
    cost_monthly: Option<f64>,
}

impl TryFrom<RawApplicationSummary> for ApplicationSummary {
    type Error = ArchError;

    fn try_from(raw: RawApplicationSummary) -> Result<Self> {
        ApplicationSummary::new(
            raw.name,
            raw.resource_count,
            raw.compliance_percentage,
            raw.cost_monthly,
        )
    }
}

impl ApplicationSummary {
    /// Build a validated summary. The compliance percentage must sit in
    /// `[0, 100]` and the optional monthly cost must be non-negative.
    pub fn new(
        name: impl Into<String>,
        resource_count: usize,
        compliance_percentage: f64,
        cost_monthly: Option<f64>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(contract_validation("name must be a non-empty string"));
        }
        if !(0.0..=100.0).contains(&compliance_percentage) {
            return Err(contract_validation(format!(
                "compliance_percentage must be within 0..100, got {compliance_percentage}"
            )));
        }
        if let Some(cost) = cost_monthly {
            if cost < 0.0 {
                return Err(contract_validation(format!(
                    "cost_monthly must be non-negative, got {cost}"
                )));
            }
        }

        Ok(ApplicationSummary {
            name,
            resource_count,
            compliance_percentage,
            cost_monthly,
        })
    }

    /// Project an internal [`Application`] into its public summary.
    ///
    /// One-way and by value: the summary holds no reference back into the
    /// internal model. Compliance is computed against `required_tags` at
    /// projection time.
    #[allow(dead_code)]
    pub fn from_application<S: AsRef<str>>(
        application: &Application,
        required_tags: &[S],
        cost_monthly: Option<f64>,
    ) -> Result<Self> {
        ApplicationSummary::new(
            application.name(),
            application.resource_count(),
            application.calculate_compliance(required_tags),
            cost_monthly,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    pub fn compliance_percentage(&self) -> f64 {
        self.compliance_percentage
    }

    /// Estimated monthly cost in USD, when known
    pub fn cost_monthly(&self) -> Option<f64> {
        self.cost_monthly
    }
}

/// Response with discovered applications (public API contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDiscoveryResponse")]
pub struct DiscoveryResponse {
    applications: Vec<ApplicationSummary>,
    total_resources: usize,
    scan_date: String,
}

#[derive(Deserialize)]
struct RawDiscoveryResponse {
    applications: Vec<ApplicationSummary>,
    total_resources: usize,
    scan_date: String,
}

impl TryFrom<RawDiscoveryResponse> for DiscoveryResponse {
    type Error = ArchError;

    fn try_from(raw: RawDiscoveryResponse) -> Result<Self> {
        DiscoveryResponse::new(raw.applications, raw.total_resources, raw.scan_date)
    }
}

impl DiscoveryResponse {
    /// Build a validated response. `scan_date` must be an ISO 8601 (RFC
    /// 3339) timestamp and `total_resources` must equal the sum of the
    /// summaries' resource counts, since summaries cover every discovered
    /// resource.
    pub fn new(
        applications: Vec<ApplicationSummary>,
        total_resources: usize,
        scan_date: impl Into<String>,
    ) -> Result<Self> {
        let scan_date = scan_date.into();
        if DateTime::parse_from_rfc3339(&scan_date).is_err() {
            return Err(contract_validation(format!(
                "scan_date must be an ISO 8601 timestamp, got '{scan_date}'"
            )));
        }

        let counted: usize = applications.iter().map(ApplicationSummary::resource_count).sum();
        if counted != total_resources {
            return Err(contract_validation(format!(
                "total_resources is {total_resources} but summaries cover {counted} resources"
            )));
        }

        Ok(DiscoveryResponse {
            applications,
            total_resources,
            scan_date,
        })
    }

    /// Assemble a response from summaries, computing the total and stamping
    /// the current UTC time as the scan date.
    #[allow(dead_code)]
    pub fn from_summaries(applications: Vec<ApplicationSummary>) -> Self {
        let total_resources = applications
            .iter()
            .map(ApplicationSummary::resource_count)
            .sum();
        DiscoveryResponse {
            applications,
            total_resources,
            scan_date: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn applications(&self) -> &[ApplicationSummary] {
        &self.applications
    }

    pub fn total_resources(&self) -> usize {
        self.total_resources
    }

    /// ISO 8601 timestamp of the scan
    pub fn scan_date(&self) -> &str {
        &self.scan_date
    }

    /// Serialize to the wire format consumed by report generators
    #[allow(dead_code)]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from the wire format; runs full contract validation
    #[allow(dead_code)]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;

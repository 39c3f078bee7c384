//! Internal application model (can change freely)

// Consumed by the discovery operation once it ships; only tests construct
// applications today.
#![allow(dead_code)]

use std::collections::HashMap;

use crate::model::Resource;

/// Logical application grouping resources (internal representation).
///
/// The resource list is frozen at construction time; grouping decisions are
/// never updated incrementally. How raw resources are grouped into
/// applications is a product decision that lives outside this model.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    name: String,
    resources: Vec<Resource>,
    tags: HashMap<String, String>,
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        resources: Vec<Resource>,
        tags: HashMap<String, String>,
    ) -> Self {
        Application {
            name: name.into(),
            resources,
            tags,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Tags describing the application itself, distinct from per-resource tags
    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    /// Number of resources in this application
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Calculate tag compliance percentage.
    ///
    /// A resource is compliant when it carries every tag in `required_tags`.
    /// Returns the share of compliant resources as a percentage in
    /// `[0.0, 100.0]`, rounded to two decimals half-away-from-zero.
    ///
    /// An application with no resources scores exactly `0.0`; there is no
    /// division by zero and no error path.
    pub fn calculate_compliance<S: AsRef<str>>(&self, required_tags: &[S]) -> f64 {
        if self.resources.is_empty() {
            return 0.0;
        }

        let compliant_count = self
            .resources
            .iter()
            .filter(|resource| resource.has_all_tags(required_tags))
            .count();

        let percentage = (compliant_count as f64 / self.resources.len() as f64) * 100.0;
        (percentage * 100.0).round() / 100.0
    }
}

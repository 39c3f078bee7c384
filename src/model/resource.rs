//! Internal resource model (can change freely)

// Consumed by the discovery operation once it ships; only tests construct
// resources today.
#![allow(dead_code)]

use std::collections::HashMap;

/// Globally unique resource identifier assigned by the provider
pub type ResourceId = String;

/// One provisioned cloud resource (internal representation).
///
/// Fields are private and there is no mutating API: a `Resource` is frozen
/// at construction time. `id` uniqueness within a scan is the caller's
/// responsibility, not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    id: ResourceId,
    name: String,
    resource_type: String,
    resource_group: String,
    subscription_id: String,
    location: String,
    tags: HashMap<String, String>,
}

impl Resource {
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
        resource_group: impl Into<String>,
        subscription_id: impl Into<String>,
        location: impl Into<String>,
        tags: HashMap<String, String>,
    ) -> Self {
        Resource {
            id: id.into(),
            name: name.into(),
            resource_type: resource_type.into(),
            resource_group: resource_group.into(),
            subscription_id: subscription_id.into(),
            location: location.into(),
            tags,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider-defined resource type, e.g. "Microsoft.Compute/virtualMachines"
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    /// Check if resource has a specific tag. Unknown names return false,
    /// never fail.
    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tags.contains_key(tag_name)
    }

    /// Check if resource has all required tags. Vacuously true for an empty
    /// list.
    pub fn has_all_tags<S: AsRef<str>>(&self, tag_names: &[S]) -> bool {
        tag_names.iter().all(|tag| self.has_tag(tag.as_ref()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vm(tags: &[(&str, &str)]) -> Resource {
        Resource::new(
            "/subscriptions/123/resourceGroups/test/providers/Microsoft.Compute/virtualMachines/vm1",
            "vm1",
            "Microsoft.Compute/virtualMachines",
            "test",
            "123",
            "eastus",
            tags.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_has_tag() {
        let resource = vm(&[("app", "web"), ("env", "prod")]);
        assert!(resource.has_tag("app"));
        assert!(resource.has_tag("env"));
        assert!(!resource.has_tag("owner"));
    }

    #[test]
    fn test_has_all_tags() {
        let resource = vm(&[("app", "web"), ("env", "prod")]);
        assert!(resource.has_all_tags(&["app", "env"]));
        assert!(!resource.has_all_tags(&["app", "env", "owner"]));
    }

    #[test]
    fn test_has_all_tags_vacuous_truth() {
        let resource = vm(&[]);
        let none: [&str; 0] = [];
        assert!(resource.has_all_tags(&none));
    }

    #[test]
    fn test_resource_without_tags() {
        // Missing tags are handled gracefully, never an error
        let resource = vm(&[]);
        assert!(!resource.has_tag("app"));
        assert!(!resource.has_all_tags(&["app", "env"]));
    }

    #[test]
    fn test_accessors() {
        let resource = vm(&[("app", "web")]);
        assert_eq!(resource.name(), "vm1");
        assert_eq!(resource.resource_type(), "Microsoft.Compute/virtualMachines");
        assert_eq!(resource.resource_group(), "test");
        assert_eq!(resource.subscription_id(), "123");
        assert_eq!(resource.location(), "eastus");
        assert_eq!(resource.tags().get("app").map(String::as_str), Some("web"));
    }
}

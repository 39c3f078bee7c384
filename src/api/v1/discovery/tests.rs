//! Black-box tests for the public discovery contracts

use std::collections::HashMap;

use crate::api::v1::{ApplicationSummary, DiscoveryRequest, DiscoveryResponse};
use crate::model::{Application, Resource};

fn subs(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_discovery_request_minimal() {
    let request = DiscoveryRequest::new(subs(&["sub-123", "sub-456"]), None, None).unwrap();

    assert_eq!(request.subscriptions(), ["sub-123", "sub-456"]);
    // Unspecified filters stay absent, they are not empty lists
    assert!(request.resource_groups().is_none());
    assert!(request.required_tags().is_none());
}

#[test]
fn test_discovery_request_with_filters() {
    let request = DiscoveryRequest::new(
        subs(&["sub-123"]),
        Some(subs(&["rg-web"])),
        Some(subs(&["app", "env"])),
    )
    .unwrap();

    assert_eq!(request.resource_groups(), Some(&subs(&["rg-web"])[..]));
    assert_eq!(request.required_tags(), Some(&subs(&["app", "env"])[..]));
}

#[test]
fn test_discovery_request_rejects_blank_elements() {
    assert!(DiscoveryRequest::new(subs(&["sub-123", ""]), None, None).is_err());
    assert!(DiscoveryRequest::new(subs(&["sub-123"]), Some(subs(&["  "])), None).is_err());
    assert!(DiscoveryRequest::new(subs(&["sub-123"]), None, Some(subs(&[""]))).is_err());
}

#[test]
fn test_discovery_request_allows_empty_subscriptions() {
    let request = DiscoveryRequest::new(vec![], None, None).unwrap();
    assert!(request.subscriptions().is_empty());
}

#[test]
fn test_discovery_request_deserialization_validates() {
    let valid: DiscoveryRequest =
        serde_json::from_str(r#"{"subscriptions": ["sub-123"]}"#).unwrap();
    assert!(valid.required_tags().is_none());

    let malformed = serde_json::from_str::<DiscoveryRequest>(
        r#"{"subscriptions": ["sub-123", ""]}"#,
    );
    assert!(malformed.is_err());

    // Wrong element type is a deserialization failure, not a silent coercion
    let wrong_type =
        serde_json::from_str::<DiscoveryRequest>(r#"{"subscriptions": [1, 2]}"#);
    assert!(wrong_type.is_err());
}

#[test]
fn test_application_summary_bounds() {
    assert!(ApplicationSummary::new("web", 3, 66.67, Some(120.0)).is_ok());
    assert!(ApplicationSummary::new("web", 3, -0.01, None).is_err());
    assert!(ApplicationSummary::new("web", 3, 100.01, None).is_err());
    assert!(ApplicationSummary::new("web", 3, 50.0, Some(-1.0)).is_err());
    assert!(ApplicationSummary::new("", 3, 50.0, None).is_err());
}

#[test]
fn test_summary_projection_from_application() {
    let resource = Resource::new(
        "/subscriptions/123/resourceGroups/test/providers/Microsoft.Compute/virtualMachines/vm1",
        "vm1",
        "Microsoft.Compute/virtualMachines",
        "test",
        "123",
        "eastus",
        HashMap::from([
            ("app".to_string(), "web".to_string()),
            ("env".to_string(), "prod".to_string()),
        ]),
    );
    let application = Application::new("web", vec![resource], HashMap::new());

    let summary =
        ApplicationSummary::from_application(&application, &["app", "env"], None).unwrap();

    assert_eq!(summary.name(), "web");
    assert_eq!(summary.resource_count(), 1);
    assert_eq!(summary.compliance_percentage(), 100.0);
    assert!(summary.cost_monthly().is_none());
}

#[test]
fn test_response_total_must_match_summaries() {
    let summaries = vec![
        ApplicationSummary::new("web", 2, 50.0, None).unwrap(),
        ApplicationSummary::new("api", 3, 100.0, None).unwrap(),
    ];

    assert!(DiscoveryResponse::new(summaries.clone(), 5, "2026-08-27T12:00:00Z").is_ok());
    assert!(DiscoveryResponse::new(summaries, 4, "2026-08-27T12:00:00Z").is_err());
}

#[test]
fn test_response_rejects_bad_scan_date() {
    let result = DiscoveryResponse::new(vec![], 0, "yesterday");
    assert!(result.is_err());
}

#[test]
fn test_response_from_summaries() {
    let summaries = vec![
        ApplicationSummary::new("web", 2, 50.0, None).unwrap(),
        ApplicationSummary::new("api", 3, 100.0, Some(42.5)).unwrap(),
    ];

    let response = DiscoveryResponse::from_summaries(summaries);

    assert_eq!(response.total_resources(), 5);
    assert!(chrono::DateTime::parse_from_rfc3339(response.scan_date()).is_ok());
}

#[test]
fn test_response_json_round_trip() {
    let summaries = vec![
        ApplicationSummary::new("web", 2, 33.33, Some(120.0)).unwrap(),
        ApplicationSummary::new("api", 1, 100.0, None).unwrap(),
    ];
    let response = DiscoveryResponse::new(summaries, 3, "2026-08-27T12:00:00+00:00").unwrap();

    let json = response.to_json().unwrap();
    let decoded = DiscoveryResponse::from_json(&json).unwrap();

    assert_eq!(decoded, response);
}

//! Terminal output for discovery results

use console::Style;

use crate::api::v1::{DiscoveryRequest, DiscoveryResponse};

/// Format the scan header echoed before discovery runs
pub fn format_request(request: &DiscoveryRequest, output: &str) -> String {
    let bold = Style::new().bold();
    let mut lines = vec![
        format!(
            "{} {}",
            bold.apply_to("Discovering resources in subscriptions:"),
            request.subscriptions().join(", ")
        ),
        format!("{} {}", bold.apply_to("Output directory:"), output),
    ];

    if let Some(groups) = request.resource_groups() {
        lines.push(format!(
            "{} {}",
            bold.apply_to("Resource groups:"),
            groups.join(", ")
        ));
    }
    if let Some(tags) = request.required_tags() {
        lines.push(format!(
            "{} {}",
            bold.apply_to("Required tags:"),
            tags.join(", ")
        ));
    }

    lines.join("\n")
}

/// Format a discovery response for the console, one application per line
pub fn format_response(response: &DiscoveryResponse) -> String {
    let bold = Style::new().bold();
    let name_style = Style::new().bold().yellow();
    let mut lines = vec![format!(
        "{} {} resources, scanned {}",
        bold.apply_to("Discovered:"),
        response.total_resources(),
        response.scan_date()
    )];

    for summary in response.applications() {
        let mut line = format!(
            "  {}  {} resources, {:.2}% compliant",
            name_style.apply_to(summary.name()),
            summary.resource_count(),
            summary.compliance_percentage()
        );
        if let Some(cost) = summary.cost_monthly() {
            line.push_str(&format!(", ${cost:.2}/month"));
        }
        lines.push(line);
    }

    lines.join("\n")
}

//! Discover command implementation

use crate::api::v1::DiscoveryRequest;
use crate::cli::DiscoverArgs;
use crate::discovery;
use crate::error::Result;
use crate::ui;

fn optional(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() { None } else { Some(values) }
}

/// Run discover command
pub fn run(args: DiscoverArgs) -> Result<()> {
    let request = DiscoveryRequest::new(
        args.subscriptions,
        optional(args.resource_groups),
        optional(args.required_tags),
    )?;

    println!("{}", ui::format_request(&request, &args.output));

    let response = discovery::discover(&request)?;
    println!("{}", ui::format_response(&response));

    Ok(())
}

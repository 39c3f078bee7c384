use clap::Parser;

/// Arguments for the discover command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Scan one subscription:\n    arch discover --subscription sub-123\n\n\
                  Scan several subscriptions into a custom directory:\n    \
                  arch discover -s sub-123 -s sub-456 --output ./docs\n\n\
                  Restrict to resource groups and required tags:\n    \
                  arch discover -s sub-123 -g rg-web -t app -t env")]
pub struct DiscoverArgs {
    /// Cloud subscription ID to scan (repeat for multiple subscriptions)
    #[arg(long = "subscription", short = 's', value_name = "ID", required = true)]
    pub subscriptions: Vec<String>,

    /// Restrict the scan to specific resource groups
    #[arg(long = "resource-group", short = 'g', value_name = "GROUP")]
    pub resource_groups: Vec<String>,

    /// Tags every resource should carry, used for compliance scoring
    #[arg(long = "required-tag", short = 't', value_name = "TAG")]
    pub required_tags: Vec<String>,

    /// Output directory for generated documentation
    #[arg(long, short = 'o', value_name = "DIR", default_value = "./output")]
    pub output: String,
}

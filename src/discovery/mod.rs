//! Resource discovery
//!
//! Discovery queries the cloud provider, groups resources into applications,
//! scores tag compliance, and projects the result into the public v1
//! contracts. The provider query and the grouping policy are collaborator
//! seams; neither is implemented yet, so [`discover`] fails loudly instead
//! of fabricating a partial result.

use crate::api::v1::{DiscoveryRequest, DiscoveryResponse};
use crate::error::{ArchError, Result};
use crate::model::{Application, Resource};

/// Provider query seam: fetches the raw resources of one subscription.
///
/// Implementations own pagination, auth, and rate limiting.
#[allow(dead_code)]
pub trait ResourceProvider {
    fn fetch(&self, subscription_id: &str) -> Result<Vec<Resource>>;
}

/// Grouping seam: maps raw resources to named applications.
///
/// The grouping policy (by tag, by resource group, by naming convention) is
/// a product decision and has not been made yet.
#[allow(dead_code)]
pub trait ApplicationGrouping {
    fn group(&self, resources: Vec<Resource>) -> Vec<Application>;
}

/// Discover resources for the given request.
///
/// Always fails with [`ArchError::DiscoveryNotImplemented`] until a
/// [`ResourceProvider`] and an [`ApplicationGrouping`] ship.
pub fn discover(_request: &DiscoveryRequest) -> Result<DiscoveryResponse> {
    Err(ArchError::DiscoveryNotImplemented)
}

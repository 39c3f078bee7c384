//! Version 1 of the public discovery contracts
//!
//! Do not change these shapes without bumping the API version.

pub mod discovery;

pub use discovery::{ApplicationSummary, DiscoveryRequest, DiscoveryResponse};

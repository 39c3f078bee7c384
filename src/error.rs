//! Error types and handling for Architecture as Code
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Contract objects are immutable by construction (private fields, no
//! mutating API), so mutation attempts are compile errors rather than a
//! runtime variant here.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Architecture as Code operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArchError {
    // Public contract errors
    #[error("Contract validation failed: {message}")]
    #[diagnostic(code(arch::contract::validation_failed))]
    ContractValidation { message: String },

    #[error("Failed to serialize contract: {0}")]
    #[diagnostic(code(arch::contract::json))]
    Json(#[from] serde_json::Error),

    // Discovery errors
    #[error("Discovery not yet implemented")]
    #[diagnostic(
        code(arch::discovery::not_implemented),
        help("Resource discovery is tracked in issue #1; no partial results are returned")
    )]
    DiscoveryNotImplemented,
}

/// Convenience constructor for contract validation failures
pub fn contract_validation(message: impl Into<String>) -> ArchError {
    ArchError::ContractValidation {
        message: message.into(),
    }
}

/// Result type alias for Architecture as Code operations
pub type Result<T> = std::result::Result<T, ArchError>;

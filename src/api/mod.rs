//! Public API contracts for Architecture as Code
//!
//! Contracts are versioned and stable. They never reference the internal
//! `model` types; projection is one-way and by value, so internal models
//! can change freely without breaking callers.

pub mod v1;

//! Internal data models for Architecture as Code
//!
//! These models represent internal state and can change freely.
//! Do not expose them directly in public APIs - use the `api` contracts
//! instead, which are projected one-way and by value.

pub mod application;
pub mod resource;

pub use application::Application;
pub use resource::Resource;

//! Common Smart Contracts utilities.
pub mod introspection;

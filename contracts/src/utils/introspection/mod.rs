//! Stuff related to introspection.
pub mod erc165;

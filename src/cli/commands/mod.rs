//! CLI command implementations.

pub mod mode;
pub mod namespaces;
pub mod resolve;
pub mod show;

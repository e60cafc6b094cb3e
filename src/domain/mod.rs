//! Domain layer for the namespace directory
//!
//! Namespace identifiers, datastore configuration values, errors and the
//! ports the infrastructure layer implements.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DirectoryError, DirectoryResult, NamespaceTaskError};

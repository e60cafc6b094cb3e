//! Infrastructure layer module
//!
//! Adapters for the outside world:
//! - Configuration loading from the environment
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;

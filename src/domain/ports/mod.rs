//! Port trait definitions
//!
//! Interfaces the domain depends on and infrastructure implements:
//! - EnvSource: named configuration variables

pub mod env_source;

pub use env_source::EnvSource;

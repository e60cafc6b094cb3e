//! Configuration management infrastructure
//!
//! Datastore configuration is read from `TOAE_*` variables:
//! - Per-backend loaders with documented defaults
//! - Warnings for every default applied
//! - Process environment adapter for the `EnvSource` port

pub mod loader;
pub mod process_env;

pub use loader::{parse_bool, BoolParseError, ConfigLoader, ConfigWarning, S3_HOST};
pub use process_env::ProcessEnv;

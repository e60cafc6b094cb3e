//! Toae Directory - namespace-to-datastore configuration
//!
//! Resolves, for a request carrying a tenant namespace, the backend connection
//! settings (Redis, Neo4j, PostgreSQL, MinIO) that tenant uses, and exposes the
//! global configuration shared by every tenant.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): namespace identifiers, configuration values, errors and ports
//! - **Infrastructure Layer** (`infrastructure`): environment loading and logging
//! - **Service Layer** (`services`): the namespace directory
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use toae_directory::{NamespaceDirectory, RequestContext};
//!
//! let directory = Arc::new(NamespaceDirectory::from_env());
//! let ctx = RequestContext::with_namespace("default");
//! let configs = directory.database_config(&ctx).unwrap();
//! assert!(configs.redis.is_some());
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    DatastoreConfigs, MinioConfig, NamespaceId, Neo4jConfig, PostgresConfig, RedisConfig,
    RequestContext, TenancyMode, NAMESPACE_KEY,
};
pub use domain::ports::EnvSource;
pub use domain::{DirectoryError, DirectoryResult, NamespaceTaskError};
pub use infrastructure::config::{ConfigLoader, ConfigWarning, ProcessEnv};
pub use services::NamespaceDirectory;

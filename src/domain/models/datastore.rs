//! Per-backend datastore configuration values and the per-namespace bundle.

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder written in place of credentials in `Debug` and serialized output.
pub const REDACTED: &str = "[REDACTED]";

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}

fn redacted(value: &str) -> &str {
    if value.is_empty() {
        ""
    } else {
        REDACTED
    }
}

/// Redis cache connection settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RedisConfig {
    /// `host:port`
    pub endpoint: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    /// Logical database index.
    pub database: i64,
}

impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("endpoint", &self.endpoint)
            .field("password", &redacted(&self.password))
            .field("database", &self.database)
            .finish()
    }
}

/// Neo4j graph database connection settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Neo4jConfig {
    /// `bolt://host:port`
    pub endpoint: String,
    pub username: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
}

impl fmt::Debug for Neo4jConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .finish()
    }
}

/// PostgreSQL connection settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub database: String,
    /// libpq `sslmode`, passed through verbatim.
    pub ssl_mode: String,
}

impl PostgresConfig {
    /// `host:port`
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("database", &self.database)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// MinIO / S3 object storage settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct MinioConfig {
    /// `host:port`, or the bare host for managed endpoints with an implicit port.
    pub endpoint: String,
    pub username: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub bucket_name: String,
    pub secure: bool,
    pub region: String,
}

impl fmt::Debug for MinioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinioConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("bucket_name", &self.bucket_name)
            .field("secure", &self.secure)
            .field("region", &self.region)
            .finish()
    }
}

/// Datastore configuration for one namespace.
///
/// Every backend is optional: the global namespace only carries object storage,
/// tenant namespaces carry everything except object storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatastoreConfigs {
    pub redis: Option<RedisConfig>,
    pub neo4j: Option<Neo4jConfig>,
    pub postgres: Option<PostgresConfig>,
    pub minio: Option<MinioConfig>,
}

impl DatastoreConfigs {
    /// Bundle for the global namespace.
    pub fn global(minio: MinioConfig) -> Self {
        Self {
            minio: Some(minio),
            ..Self::default()
        }
    }

    /// Bundle for a tenant namespace.
    pub fn tenant(redis: RedisConfig, neo4j: Neo4jConfig, postgres: PostgresConfig) -> Self {
        Self {
            redis: Some(redis),
            neo4j: Some(neo4j),
            postgres: Some(postgres),
            minio: None,
        }
    }
}

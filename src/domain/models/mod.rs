pub mod datastore;
pub mod namespace;

pub use datastore::{
    DatastoreConfigs, MinioConfig, Neo4jConfig, PostgresConfig, RedisConfig, REDACTED,
};
pub use namespace::{NamespaceId, RequestContext, TenancyMode, NAMESPACE_KEY};

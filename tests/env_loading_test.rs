//! Loading the directory from the real process environment.
//!
//! Every test goes through `temp_env`, which serializes access to the
//! environment within this test binary.

use toae_directory::{NamespaceDirectory, NamespaceId, RequestContext, TenancyMode};

const ALL_VARS: [&str; 22] = [
    "TOAE_SAAS_MODE",
    "TOAE_REDIS_HOST",
    "TOAE_REDIS_PORT",
    "TOAE_REDIS_PASSWORD",
    "TOAE_REDIS_DB_NUMBER",
    "TOAE_NEO4J_HOST",
    "TOAE_NEO4J_BOLT_PORT",
    "TOAE_NEO4J_USER",
    "TOAE_NEO4J_PASSWORD",
    "TOAE_POSTGRES_USER_DB_HOST",
    "TOAE_POSTGRES_USER_DB_PORT",
    "TOAE_POSTGRES_USER_DB_USER",
    "TOAE_POSTGRES_USER_DB_PASSWORD",
    "TOAE_POSTGRES_USER_DB_NAME",
    "TOAE_POSTGRES_USER_DB_SSLMODE",
    "TOAE_MINIO_HOST",
    "TOAE_MINIO_PORT",
    "TOAE_MINIO_USER",
    "TOAE_MINIO_PASSWORD",
    "TOAE_MINIO_BUCKET",
    "TOAE_MINIO_REGION",
    "TOAE_MINIO_SECURE",
];

/// Run `f` with every `TOAE_*` variable unset except `set`.
fn with_env<R>(set: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|name| {
            let value = set.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f)
}

fn default_configs(directory: &NamespaceDirectory) -> toae_directory::DatastoreConfigs {
    directory
        .database_config(&RequestContext::with_namespace(NamespaceId::DEFAULT))
        .unwrap()
}

#[test]
fn test_defaults_with_empty_environment() {
    with_env(&[], || {
        let directory = NamespaceDirectory::from_env();
        assert_eq!(directory.mode(), TenancyMode::SingleTenant);

        let configs = default_configs(&directory);
        assert_eq!(configs.redis.unwrap().endpoint, "localhost:6379");
        assert_eq!(configs.neo4j.unwrap().endpoint, "bolt://localhost:7687");
        assert_eq!(configs.postgres.unwrap().endpoint(), "localhost:5432");
        assert_eq!(
            directory.global_config().minio.unwrap().endpoint,
            "toae-file-server:9000"
        );
    });
}

#[test]
fn test_redis_port_override() {
    with_env(&[("TOAE_REDIS_PORT", "6380")], || {
        let directory = NamespaceDirectory::from_env();
        assert_eq!(default_configs(&directory).redis.unwrap().endpoint, "localhost:6380");
    });
}

#[test]
fn test_s3_host_drops_port() {
    with_env(
        &[("TOAE_MINIO_HOST", "s3.amazonaws.com"), ("TOAE_MINIO_PORT", "9000")],
        || {
            let directory = NamespaceDirectory::from_env();
            assert_eq!(
                directory.global_config().minio.unwrap().endpoint,
                "s3.amazonaws.com"
            );
        },
    );
}

#[test]
fn test_malformed_values_fall_back() {
    with_env(
        &[
            ("TOAE_REDIS_DB_NUMBER", "x"),
            ("TOAE_POSTGRES_USER_DB_PORT", "99999"),
            ("TOAE_MINIO_SECURE", "maybe"),
        ],
        || {
            let directory = NamespaceDirectory::from_env();
            let configs = default_configs(&directory);
            assert_eq!(configs.redis.unwrap().database, 0);
            assert_eq!(configs.postgres.unwrap().port, 5432);
            assert!(!directory.global_config().minio.unwrap().secure);
        },
    );
}

#[test]
fn test_saas_mode_on() {
    with_env(&[("TOAE_SAAS_MODE", "on")], || {
        let directory = NamespaceDirectory::from_env();
        assert_eq!(directory.mode(), TenancyMode::MultiTenant);
        assert!(directory.namespaces().is_empty());
        assert!(!directory.is_single_tenant_deployment());
    });
}

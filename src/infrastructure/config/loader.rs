use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::{
    MinioConfig, Neo4jConfig, PostgresConfig, RedisConfig, TenancyMode,
};
use crate::domain::ports::EnvSource;

/// Names of the variables read by [`ConfigLoader`].
pub mod vars {
    pub const SAAS_MODE: &str = "TOAE_SAAS_MODE";

    pub const REDIS_HOST: &str = "TOAE_REDIS_HOST";
    pub const REDIS_PORT: &str = "TOAE_REDIS_PORT";
    pub const REDIS_PASSWORD: &str = "TOAE_REDIS_PASSWORD";
    pub const REDIS_DB_NUMBER: &str = "TOAE_REDIS_DB_NUMBER";

    pub const NEO4J_HOST: &str = "TOAE_NEO4J_HOST";
    pub const NEO4J_BOLT_PORT: &str = "TOAE_NEO4J_BOLT_PORT";
    pub const NEO4J_USER: &str = "TOAE_NEO4J_USER";
    pub const NEO4J_PASSWORD: &str = "TOAE_NEO4J_PASSWORD";

    pub const POSTGRES_HOST: &str = "TOAE_POSTGRES_USER_DB_HOST";
    pub const POSTGRES_PORT: &str = "TOAE_POSTGRES_USER_DB_PORT";
    pub const POSTGRES_USER: &str = "TOAE_POSTGRES_USER_DB_USER";
    pub const POSTGRES_PASSWORD: &str = "TOAE_POSTGRES_USER_DB_PASSWORD";
    pub const POSTGRES_NAME: &str = "TOAE_POSTGRES_USER_DB_NAME";
    pub const POSTGRES_SSLMODE: &str = "TOAE_POSTGRES_USER_DB_SSLMODE";

    pub const MINIO_HOST: &str = "TOAE_MINIO_HOST";
    pub const MINIO_PORT: &str = "TOAE_MINIO_PORT";
    pub const MINIO_USER: &str = "TOAE_MINIO_USER";
    pub const MINIO_PASSWORD: &str = "TOAE_MINIO_PASSWORD";
    pub const MINIO_BUCKET: &str = "TOAE_MINIO_BUCKET";
    pub const MINIO_REGION: &str = "TOAE_MINIO_REGION";
    pub const MINIO_SECURE: &str = "TOAE_MINIO_SECURE";
}

/// Documented fallbacks for unset or unusable variables.
pub mod defaults {
    pub const REDIS_HOST: &str = "localhost";
    pub const REDIS_PORT: &str = "6379";
    pub const REDIS_DB_NUMBER: i64 = 0;

    pub const NEO4J_HOST: &str = "localhost";
    pub const NEO4J_BOLT_PORT: &str = "7687";

    pub const POSTGRES_HOST: &str = "localhost";
    pub const POSTGRES_PORT: u16 = 5432;

    pub const MINIO_HOST: &str = "toae-file-server";
    pub const MINIO_PORT: &str = "9000";
    pub const MINIO_SECURE: bool = false;
}

/// Managed S3 host; its endpoint never carries an explicit port.
pub const S3_HOST: &str = "s3.amazonaws.com";

const BOLT_SCHEME: &str = "bolt://";
const SAAS_MODE_ON: &str = "on";

/// A boolean literal outside the accepted `true`/`false` family.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid boolean literal {0:?}")]
pub struct BoolParseError(String);

/// Parse `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, BoolParseError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(BoolParseError(raw.to_string())),
    }
}

/// Record of a default applied in place of a missing or unusable variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub variable: &'static str,
    pub applied: String,
    pub reason: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} defaults to: {}", self.variable, self.applied)?;
        if let Some(reason) = &self.reason {
            write!(f, " ({reason})")?;
        }
        Ok(())
    }
}

/// Builds backend configuration values from named variables.
///
/// Loading never fails: a missing variable falls back to its documented
/// default and is reported through `tracing::warn!` and [`Self::warnings`];
/// unparseable numbers silently fall back to their default.
pub struct ConfigLoader<'a> {
    env: &'a dyn EnvSource,
    warnings: Vec<ConfigWarning>,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(env: &'a dyn EnvSource) -> Self {
        Self {
            env,
            warnings: Vec::new(),
        }
    }

    /// Defaults applied so far, in load order.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<ConfigWarning> {
        self.warnings
    }

    /// Tenancy selected by `TOAE_SAAS_MODE`; only the exact value `on` enables SaaS.
    pub fn tenancy_mode(&mut self) -> TenancyMode {
        match self.env.get(vars::SAAS_MODE) {
            None => {
                self.record(vars::SAAS_MODE, "off", None);
                TenancyMode::SingleTenant
            }
            Some(value) if value == SAAS_MODE_ON => TenancyMode::MultiTenant,
            Some(_) => TenancyMode::SingleTenant,
        }
    }

    pub fn redis(&mut self) -> RedisConfig {
        let host = self.var_or(vars::REDIS_HOST, defaults::REDIS_HOST);
        let port = self.var_or(vars::REDIS_PORT, defaults::REDIS_PORT);
        let password = self.var_or(vars::REDIS_PASSWORD, "");
        let database = self.number_or(vars::REDIS_DB_NUMBER, defaults::REDIS_DB_NUMBER);

        RedisConfig {
            endpoint: format!("{host}:{port}"),
            password,
            database,
        }
    }

    pub fn neo4j(&mut self) -> Neo4jConfig {
        let host = self.var_or(vars::NEO4J_HOST, defaults::NEO4J_HOST);
        let port = self.var_or(vars::NEO4J_BOLT_PORT, defaults::NEO4J_BOLT_PORT);

        Neo4jConfig {
            endpoint: format!("{BOLT_SCHEME}{host}:{port}"),
            username: self.var_or(vars::NEO4J_USER, ""),
            password: self.var_or(vars::NEO4J_PASSWORD, ""),
        }
    }

    pub fn postgres(&mut self) -> PostgresConfig {
        PostgresConfig {
            host: self.var_or(vars::POSTGRES_HOST, defaults::POSTGRES_HOST),
            port: self.number_or(vars::POSTGRES_PORT, defaults::POSTGRES_PORT),
            username: self.var_or(vars::POSTGRES_USER, ""),
            password: self.var_or(vars::POSTGRES_PASSWORD, ""),
            database: self.var_or(vars::POSTGRES_NAME, ""),
            ssl_mode: self.var_or(vars::POSTGRES_SSLMODE, ""),
        }
    }

    pub fn minio(&mut self) -> MinioConfig {
        let host = self.var_or(vars::MINIO_HOST, defaults::MINIO_HOST);
        let port = self.var_or(vars::MINIO_PORT, defaults::MINIO_PORT);
        let endpoint = if host == S3_HOST {
            host
        } else {
            format!("{host}:{port}")
        };

        MinioConfig {
            endpoint,
            username: self.var_or(vars::MINIO_USER, ""),
            password: self.var_or(vars::MINIO_PASSWORD, ""),
            bucket_name: self.var_or(vars::MINIO_BUCKET, ""),
            secure: self.minio_secure(),
            region: self.var_or(vars::MINIO_REGION, ""),
        }
    }

    fn minio_secure(&mut self) -> bool {
        let Some(raw) = self.env.get(vars::MINIO_SECURE) else {
            self.record(vars::MINIO_SECURE, defaults::MINIO_SECURE, None);
            return defaults::MINIO_SECURE;
        };
        if raw.is_empty() {
            return defaults::MINIO_SECURE;
        }
        parse_bool(&raw).unwrap_or_else(|err| {
            self.record(
                vars::MINIO_SECURE,
                defaults::MINIO_SECURE,
                Some(err.to_string()),
            );
            defaults::MINIO_SECURE
        })
    }

    fn var_or(&mut self, key: &'static str, default: &str) -> String {
        self.env.get(key).unwrap_or_else(|| {
            self.record(key, default, None);
            default.to_string()
        })
    }

    fn number_or<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: FromStr + fmt::Display + Copy,
    {
        match self.env.get(key) {
            Some(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|_| {
                debug!(variable = key, value = %raw, fallback = %default, "unparseable number");
                default
            }),
            _ => {
                self.record(key, default, None);
                default
            }
        }
    }

    fn record(&mut self, variable: &'static str, applied: impl fmt::Display, reason: Option<String>) {
        let warning = ConfigWarning {
            variable,
            applied: applied.to_string(),
            reason,
        };
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

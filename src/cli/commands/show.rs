use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{DatastoreConfigs, NamespaceId, RequestContext, REDACTED};
use crate::services::NamespaceDirectory;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Namespace to look up
    #[arg(default_value = NamespaceId::DEFAULT, conflicts_with = "global")]
    pub namespace: String,

    /// Show the configuration shared by all tenants
    #[arg(long)]
    pub global: bool,
}

#[derive(Debug, Serialize)]
pub struct NamespaceDetails {
    pub namespace: NamespaceId,
    #[serde(flatten)]
    pub configs: DatastoreConfigs,
}

fn secret(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        REDACTED
    }
}

impl CommandOutput for NamespaceDetails {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Namespace: {}", self.namespace);
        let _ = writeln!(out, "─────────────────────────────────────────");

        match &self.configs.redis {
            Some(redis) => {
                let _ = writeln!(out, "Redis:      {} (db {})", redis.endpoint, redis.database);
                let _ = writeln!(out, "  password: {}", secret(&redis.password));
            }
            None => {
                let _ = writeln!(out, "Redis:      -");
            }
        }
        match &self.configs.neo4j {
            Some(neo4j) => {
                let _ = writeln!(out, "Neo4j:      {}", neo4j.endpoint);
                let _ = writeln!(out, "  user:     {}", neo4j.username);
                let _ = writeln!(out, "  password: {}", secret(&neo4j.password));
            }
            None => {
                let _ = writeln!(out, "Neo4j:      -");
            }
        }
        match &self.configs.postgres {
            Some(pg) => {
                let _ = writeln!(out, "PostgreSQL: {}/{}", pg.endpoint(), pg.database);
                let _ = writeln!(out, "  user:     {}", pg.username);
                let _ = writeln!(out, "  password: {}", secret(&pg.password));
                let _ = writeln!(out, "  sslmode:  {}", pg.ssl_mode);
            }
            None => {
                let _ = writeln!(out, "PostgreSQL: -");
            }
        }
        match &self.configs.minio {
            Some(minio) => {
                let scheme = if minio.secure { "https" } else { "http" };
                let _ = writeln!(out, "MinIO:      {scheme}://{}", minio.endpoint);
                let _ = writeln!(out, "  bucket:   {}", minio.bucket_name);
                let _ = writeln!(out, "  region:   {}", minio.region);
                let _ = writeln!(out, "  user:     {}", minio.username);
                let _ = writeln!(out, "  password: {}", secret(&minio.password));
            }
            None => {
                let _ = writeln!(out, "MinIO:      -");
            }
        }

        out.trim_end().to_string()
    }
}

pub fn details(directory: &NamespaceDirectory, args: &ShowArgs) -> Result<NamespaceDetails> {
    if args.global {
        return Ok(NamespaceDetails {
            namespace: NamespaceId::global(),
            configs: directory.global_config(),
        });
    }

    let ctx = RequestContext::with_namespace(args.namespace.as_str());
    let configs = directory
        .database_config(&ctx)
        .with_context(|| format!("Failed to resolve configuration for '{}'", args.namespace))?;

    Ok(NamespaceDetails {
        namespace: NamespaceId::new(args.namespace.as_str()),
        configs,
    })
}

pub fn execute(directory: &NamespaceDirectory, args: ShowArgs, json: bool) -> Result<()> {
    output(&details(directory, &args)?, json);
    Ok(())
}

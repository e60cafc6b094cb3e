use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::NamespaceId;
use crate::services::NamespaceDirectory;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Caller identity, e.g. an email address
    pub identity: String,
}

#[derive(Debug, Serialize)]
pub struct Resolution {
    pub identity: String,
    pub namespace: Option<NamespaceId>,
}

impl CommandOutput for Resolution {
    fn to_human(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{} -> {namespace}", self.identity),
            None => format!("{} -> (unresolved)", self.identity),
        }
    }
}

pub fn resolve(directory: &NamespaceDirectory, args: ResolveArgs) -> Resolution {
    let namespace = directory.fetch_namespace(&args.identity);
    Resolution {
        identity: args.identity,
        namespace,
    }
}

pub fn execute(directory: &NamespaceDirectory, args: ResolveArgs, json: bool) -> Result<()> {
    output(&resolve(directory, args), json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_single_tenant_resolves_default() {
        let env: HashMap<String, String> = HashMap::new();
        let directory = NamespaceDirectory::initialize(&env);
        let resolution = resolve(
            &directory,
            ResolveArgs {
                identity: "ops@example.com".to_string(),
            },
        );

        assert_eq!(resolution.to_human(), "ops@example.com -> default");
        assert_eq!(resolution.to_json()["namespace"], "default");
    }

    #[test]
    fn test_saas_is_unresolved() {
        let env = HashMap::from([("TOAE_SAAS_MODE".to_string(), "on".to_string())]);
        let directory = NamespaceDirectory::initialize(&env);
        let resolution = resolve(
            &directory,
            ResolveArgs {
                identity: "ops@example.com".to_string(),
            },
        );

        assert_eq!(resolution.to_human(), "ops@example.com -> (unresolved)");
        assert!(resolution.to_json()["namespace"].is_null());
    }
}

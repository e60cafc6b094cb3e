use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::NamespaceId;
use crate::services::NamespaceDirectory;

#[derive(Debug, Args)]
pub struct NamespacesArgs {}

#[derive(Debug, Serialize)]
pub struct NamespaceList {
    pub namespaces: Vec<NamespaceId>,
}

impl CommandOutput for NamespaceList {
    fn to_human(&self) -> String {
        if self.namespaces.is_empty() {
            return "No namespaces configured.".to_string();
        }
        self.namespaces
            .iter()
            .map(NamespaceId::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Directory namespaces, sorted for stable display.
pub fn list(directory: &NamespaceDirectory) -> NamespaceList {
    let mut namespaces = directory.namespaces();
    namespaces.sort();
    NamespaceList { namespaces }
}

pub fn execute(directory: &NamespaceDirectory, _args: NamespacesArgs, json: bool) -> Result<()> {
    output(&list(directory), json);
    Ok(())
}

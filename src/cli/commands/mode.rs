use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::TenancyMode;
use crate::services::NamespaceDirectory;

#[derive(Debug, Args)]
pub struct ModeArgs {}

#[derive(Debug, Serialize)]
pub struct DeploymentMode {
    pub mode: TenancyMode,
    pub single_tenant_deployment: bool,
}

impl CommandOutput for DeploymentMode {
    fn to_human(&self) -> String {
        format!(
            "Mode: {} (single-tenant deployment: {})",
            self.mode,
            if self.single_tenant_deployment { "yes" } else { "no" }
        )
    }
}

pub fn execute(directory: &NamespaceDirectory, _args: ModeArgs, json: bool) -> Result<()> {
    let result = DeploymentMode {
        mode: directory.mode(),
        single_tenant_deployment: directory.is_single_tenant_deployment(),
    };
    output(&result, json);
    Ok(())
}

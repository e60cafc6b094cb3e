//! Namespace directory: the process-wide map from tenant to datastore configuration.
//!
//! A [`NamespaceDirectory`] only exists once it has been fully populated, so every
//! operation on it observes a ready directory. The composition root builds it once
//! and hands out `Arc<NamespaceDirectory>` handles; there is no ambient global.
//!
//! The map is guarded by a single [`RwLock`]. It is written exactly once, during
//! construction, under one exclusive acquisition; every later access is a shared
//! read that returns owned copies.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use tracing::{error, info, warn};

use crate::domain::errors::{DirectoryError, DirectoryResult, NamespaceTaskError};
use crate::domain::models::{
    DatastoreConfigs, MinioConfig, NamespaceId, RequestContext, TenancyMode,
};
use crate::domain::ports::EnvSource;
use crate::infrastructure::config::{ConfigLoader, ProcessEnv};

/// Thread-safe namespace → [`DatastoreConfigs`] directory.
#[derive(Debug)]
pub struct NamespaceDirectory {
    mode: TenancyMode,
    entries: RwLock<HashMap<NamespaceId, DatastoreConfigs>>,
}

impl NamespaceDirectory {
    /// Populate the directory from the process environment.
    pub fn from_env() -> Self {
        Self::initialize(&ProcessEnv)
    }

    /// Populate the directory from `env`.
    ///
    /// The global namespace always receives the object storage config. In
    /// single-tenant mode the `default` namespace receives cache, graph and
    /// relational configs. Multi-tenant mode creates no tenant entries here.
    pub fn initialize(env: &dyn EnvSource) -> Self {
        let mut loader = ConfigLoader::new(env);
        let minio = loader.minio();
        let mode = loader.tenancy_mode();

        let tenants = match mode {
            TenancyMode::SingleTenant => {
                let bundle = DatastoreConfigs::tenant(loader.redis(), loader.neo4j(), loader.postgres());
                vec![(NamespaceId::default_tenant(), bundle)]
            }
            TenancyMode::MultiTenant => Vec::new(),
        };

        let directory = Self::from_bundles(mode, minio, tenants);
        info!(
            mode = %mode,
            namespaces = directory.namespaces().len(),
            defaults_applied = loader.warnings().len(),
            "namespace directory ready"
        );
        directory
    }

    /// Assemble a directory from already loaded configuration.
    ///
    /// Tenant entries keyed by the global namespace are dropped so the global
    /// bundle always holds object storage only.
    pub fn from_bundles<I>(mode: TenancyMode, global_minio: MinioConfig, tenants: I) -> Self
    where
        I: IntoIterator<Item = (NamespaceId, DatastoreConfigs)>,
    {
        let directory = Self {
            mode,
            entries: RwLock::new(HashMap::new()),
        };

        {
            let mut entries = directory
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            for (namespace, bundle) in tenants {
                if namespace.is_global() {
                    warn!("ignoring tenant entry for reserved namespace {namespace}");
                    continue;
                }
                entries.insert(namespace, bundle);
            }
            entries.insert(NamespaceId::global(), DatastoreConfigs::global(global_minio));
        }

        directory
    }

    pub const fn mode(&self) -> TenancyMode {
        self.mode
    }

    /// Every namespace except the global one, in no particular order.
    pub fn namespaces(&self) -> Vec<NamespaceId> {
        self.read()
            .keys()
            .filter(|ns| !ns.is_global())
            .cloned()
            .collect()
    }

    /// Copy of the bundle for the namespace carried by `ctx`.
    pub fn database_config(&self, ctx: &RequestContext) -> DirectoryResult<DatastoreConfigs> {
        let namespace = ctx.namespace()?;
        self.read()
            .get(&namespace)
            .cloned()
            .ok_or(DirectoryError::NamespaceNotFound(namespace))
    }

    /// Copy of the bundle shared by all tenants.
    pub fn global_config(&self) -> DatastoreConfigs {
        self.read()
            .get(&NamespaceId::global())
            .cloned()
            .unwrap_or_default()
    }

    /// Run `apply` once per non-global namespace with a context carrying it.
    ///
    /// Failures are logged and never stop the sweep. The lock is not held while
    /// `apply` runs, so it may call back into the directory. Returns the number
    /// of namespaces visited.
    pub fn for_each_namespace<F>(&self, mut apply: F) -> usize
    where
        F: FnMut(&RequestContext) -> Result<(), NamespaceTaskError>,
    {
        let namespaces = self.namespaces();
        for namespace in &namespaces {
            let ctx = RequestContext::with_namespace(namespace.clone());
            if let Err(err) = apply(&ctx) {
                let cause = format!("{:#}", err.source);
                error!(namespace = %namespace, error = %cause, "{}", err.message);
            }
        }
        namespaces.len()
    }

    /// Namespace that owns `identity` (for example a user's email).
    ///
    /// A single-tenant deployment always answers `default`. Tenant resolution
    /// for SaaS deployments does not exist yet, so `None` is returned there.
    pub fn fetch_namespace(&self, identity: &str) -> Option<NamespaceId> {
        if self.is_single_tenant_deployment() {
            return Some(NamespaceId::default_tenant());
        }
        warn!(identity, "tenant resolution is not available for this deployment");
        None
    }

    /// True iff `default` is the one and only non-global namespace.
    pub fn is_single_tenant_deployment(&self) -> bool {
        matches!(self.namespaces().as_slice(), [only] if only.as_str() == NamespaceId::DEFAULT)
    }

    // The map is never written after construction, so a poisoned guard still
    // protects a complete map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NamespaceId, DatastoreConfigs>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

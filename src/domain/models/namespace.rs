//! Namespace identifiers, tenancy mode and the request context that carries them.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DirectoryError, DirectoryResult};

/// Metadata key under which a [`RequestContext`] carries its namespace.
pub const NAMESPACE_KEY: &str = "namespace";

/// Opaque tenant identifier.
///
/// Equality is exact string equality; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceId(String);

impl NamespaceId {
    /// Configuration shared across every tenant.
    pub const GLOBAL: &'static str = "global";
    /// The only namespace of a single-tenant deployment.
    pub const DEFAULT: &'static str = "default";
    /// Reserved for database-scoped configuration.
    pub const DATABASE: &'static str = "database";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn global() -> Self {
        Self::new(Self::GLOBAL)
    }

    pub fn default_tenant() -> Self {
        Self::new(Self::DEFAULT)
    }

    pub fn database() -> Self {
        Self::new(Self::DATABASE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_global(&self) -> bool {
        self.0 == Self::GLOBAL
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NamespaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NamespaceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NamespaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Deployment tenancy, selected by `TOAE_SAAS_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenancyMode {
    /// Non-SaaS: exactly one fully configured `default` namespace.
    SingleTenant,
    /// SaaS: per-tenant namespaces.
    MultiTenant,
}

impl TenancyMode {
    pub const fn is_saas(self) -> bool {
        matches!(self, Self::MultiTenant)
    }
}

impl fmt::Display for TenancyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleTenant => write!(f, "single-tenant"),
            Self::MultiTenant => write!(f, "multi-tenant"),
        }
    }
}

/// Request-scoped metadata.
///
/// Callers attach the tenant under [`NAMESPACE_KEY`]; other entries are free-form
/// and never affect namespace extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    values: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context carrying `namespace`.
    pub fn with_namespace(namespace: impl Into<NamespaceId>) -> Self {
        let mut ctx = Self::new();
        ctx.set_namespace(namespace);
        ctx
    }

    pub fn set_namespace(&mut self, namespace: impl Into<NamespaceId>) {
        let namespace: NamespaceId = namespace.into();
        self.values.insert(NAMESPACE_KEY.to_string(), namespace.0);
    }

    /// Extract the namespace carried by this context.
    ///
    /// An empty value is still a namespace; only a missing key is an error.
    pub fn namespace(&self) -> DirectoryResult<NamespaceId> {
        self.values
            .get(NAMESPACE_KEY)
            .map(|ns| NamespaceId::new(ns.as_str()))
            .ok_or(DirectoryError::MissingNamespace)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

use std::fmt;

use serde_json::Value;
use thiserror::Error;

const NAMESPACE_SELECTOR_KEY: &str = "namespaceSelector";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Enumerates the levels of the management hierarchy.
pub enum EntityKind {
    Tenant,
    Workspace,
    TrafficGroup,
    GatewayGroup,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Tenant => "tenant",
            EntityKind::Workspace => "workspace",
            EntityKind::TrafficGroup => "traffic group",
            EntityKind::GatewayGroup => "gateway group",
        }
    }

    /// Path segment of the child collection below the parent FQN.
    pub fn collection_path(self) -> &'static str {
        match self {
            EntityKind::Tenant => "tenants",
            EntityKind::Workspace => "workspaces",
            EntityKind::TrafficGroup => "trafficgroups",
            EntityKind::GatewayGroup => "gatewaygroups",
        }
    }

    /// Key holding the entity list in a listing response.
    pub fn list_key(self) -> &'static str {
        match self {
            EntityKind::Tenant => "tenants",
            EntityKind::Workspace => "workspaces",
            EntityKind::TrafficGroup | EntityKind::GatewayGroup => "groups",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("entity is missing the 'fqn' field")]
    MissingFqn,
    #[error("entity field 'fqn' is not a string")]
    NonStringFqn,
    #[error("malformed fqn '{0}'")]
    MalformedFqn(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-qualified entity name, e.g. `organizations/tfc/tenants/t1`.
///
/// Kept exactly as returned by the API; whitespace only matters for validation.
pub struct Fqn(String);

impl Fqn {
    pub fn parse(raw: &str) -> Result<Self, EntityError> {
        let trimmed = raw.trim();
        let last = trimmed.rsplit('/').next().unwrap_or_default();
        if trimmed.is_empty() || last.trim().is_empty() {
            return Err(EntityError::MalformedFqn(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn organization(org: &str) -> Result<Self, EntityError> {
        Self::parse(&format!("organizations/{}", org.trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as the display name.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A single entity object exactly as returned by a listing call.
pub struct EntityRecord {
    raw: Value,
}

impl EntityRecord {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Raw `fqn` value as a string, for diagnostics on records that fail validation.
    pub fn fqn_label(&self) -> String {
        match self.raw.get("fqn") {
            Some(Value::String(fqn)) => fqn.clone(),
            Some(other) => other.to_string(),
            None => "<unknown>".to_string(),
        }
    }

    pub fn fqn(&self) -> Result<Fqn, EntityError> {
        match self.raw.get("fqn") {
            None | Some(Value::Null) => Err(EntityError::MissingFqn),
            Some(Value::String(fqn)) => Fqn::parse(fqn),
            Some(_) => Err(EntityError::NonStringFqn),
        }
    }

    pub fn namespace_selector(&self) -> Option<&Value> {
        self.raw.get(NAMESPACE_SELECTOR_KEY)
    }
}

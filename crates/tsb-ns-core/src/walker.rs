use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::counter::{count_namespaces, sum_namespaces};
use crate::entity::{EntityError, EntityKind, EntityRecord, Fqn};
use crate::fetch::{EntityFetcher, FetchError};
use crate::report::{GroupTotals, WorkspaceCounts, WorkspaceReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How a failure scoped to a single tenant affects the rest of the run.
pub enum TenantFailurePolicy {
    /// Skip the tenant, record a diagnostic, continue with the next one.
    #[default]
    Isolate,
    /// Abort the whole run.
    FailFast,
}

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to list tenants: {0}")]
    TenantList(#[source] FetchError),
    #[error("failed to list workspaces for tenant {tenant}: {source}")]
    WorkspaceList {
        tenant: String,
        #[source]
        source: FetchError,
    },
    #[error("invalid tenant {fqn}: {source}")]
    Tenant {
        fqn: String,
        #[source]
        source: EntityError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticScope {
    Tenant,
    Workspace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An entity skipped during traversal, kept out of the report body.
pub struct WalkDiagnostic {
    pub scope: DiagnosticScope,
    pub fqn: String,
    pub message: String,
}

impl fmt::Display for WalkDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {}: {}", self.fqn, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkOutcome {
    /// Rows in discovery order.
    pub reports: Vec<WorkspaceReport>,
    pub group_totals: GroupTotals,
    pub diagnostics: Vec<WalkDiagnostic>,
}

/// Sequential traversal of tenants, workspaces and their groups.
pub struct HierarchyWalker<'a, F: EntityFetcher + ?Sized> {
    fetcher: &'a F,
    policy: TenantFailurePolicy,
}

impl<'a, F: EntityFetcher + ?Sized> HierarchyWalker<'a, F> {
    pub fn new(fetcher: &'a F, policy: TenantFailurePolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn walk(&self, organization: &Fqn) -> Result<WalkOutcome, WalkError> {
        let tenants = self
            .fetcher
            .fetch_children(EntityKind::Tenant, organization.as_str())
            .map_err(WalkError::TenantList)?;

        let mut outcome = WalkOutcome::default();
        for tenant in &tenants {
            self.walk_tenant(tenant, &mut outcome)?;
        }
        Ok(outcome)
    }

    fn walk_tenant(
        &self,
        tenant: &EntityRecord,
        outcome: &mut WalkOutcome,
    ) -> Result<(), WalkError> {
        let tenant_fqn = match tenant.fqn() {
            Ok(fqn) => fqn,
            Err(source) => {
                return self.tenant_failure(
                    outcome,
                    WalkError::Tenant {
                        fqn: tenant.fqn_label(),
                        source,
                    },
                    tenant.fqn_label(),
                );
            }
        };
        let tenant_name = tenant_fqn.short_name();
        debug!(tenant = tenant_name, "processing tenant");

        let workspaces = match self
            .fetcher
            .fetch_children(EntityKind::Workspace, tenant_fqn.as_str())
        {
            Ok(workspaces) => workspaces,
            Err(source) => {
                return self.tenant_failure(
                    outcome,
                    WalkError::WorkspaceList {
                        tenant: tenant_fqn.to_string(),
                        source,
                    },
                    tenant_fqn.to_string(),
                );
            }
        };

        for workspace in &workspaces {
            match self.process_workspace(tenant_name, workspace) {
                Ok(report) => {
                    outcome.group_totals.record(&report);
                    outcome.reports.push(report);
                }
                Err(error) => {
                    let diagnostic = WalkDiagnostic {
                        scope: DiagnosticScope::Workspace,
                        fqn: workspace.fqn_label(),
                        message: error.to_string(),
                    };
                    debug!(
                        fqn = %diagnostic.fqn,
                        error = %diagnostic.message,
                        "skipping workspace"
                    );
                    outcome.diagnostics.push(diagnostic);
                }
            }
        }
        Ok(())
    }

    fn tenant_failure(
        &self,
        outcome: &mut WalkOutcome,
        error: WalkError,
        fqn: String,
    ) -> Result<(), WalkError> {
        match self.policy {
            TenantFailurePolicy::FailFast => Err(error),
            TenantFailurePolicy::Isolate => {
                let diagnostic = WalkDiagnostic {
                    scope: DiagnosticScope::Tenant,
                    fqn,
                    message: error.to_string(),
                };
                debug!(
                    fqn = %diagnostic.fqn,
                    error = %diagnostic.message,
                    "skipping tenant"
                );
                outcome.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    /// Builds the row for one workspace. Any error discards the whole row.
    fn process_workspace(
        &self,
        tenant_name: &str,
        workspace: &EntityRecord,
    ) -> Result<WorkspaceReport, EntityError> {
        let workspace_fqn = workspace.fqn()?;
        let workspace_ns = count_namespaces(workspace);

        let traffic_groups = self.fetch_groups(EntityKind::TrafficGroup, &workspace_fqn);
        let gateway_groups = self.fetch_groups(EntityKind::GatewayGroup, &workspace_fqn);

        let report = WorkspaceReport::new(
            tenant_name,
            workspace_fqn.short_name(),
            WorkspaceCounts {
                workspace_ns,
                traffic_groups: traffic_groups.len(),
                traffic_group_ns: sum_namespaces(&traffic_groups),
                gateway_groups: gateway_groups.len(),
                gateway_group_ns: sum_namespaces(&gateway_groups),
            },
        );
        debug!(
            workspace = %report.workspace_name,
            workspace_ns = report.workspace_ns_count,
            traffic_groups = report.traffic_group_count,
            traffic_group_ns = report.traffic_group_ns_count,
            gateway_groups = report.gateway_group_count,
            gateway_group_ns = report.gateway_group_ns_count,
            "processed workspace"
        );
        Ok(report)
    }

    fn fetch_groups(&self, kind: EntityKind, workspace_fqn: &Fqn) -> Vec<EntityRecord> {
        match self.fetcher.fetch_children(kind, workspace_fqn.as_str()) {
            Ok(groups) => groups,
            Err(error) => {
                debug!(
                    workspace = %workspace_fqn,
                    kind = %kind,
                    %error,
                    "group listing unavailable; counting as empty"
                );
                Vec::new()
            }
        }
    }
}

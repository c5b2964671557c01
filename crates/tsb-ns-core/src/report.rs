use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Namespace counts for one successfully processed workspace.
pub struct WorkspaceReport {
    pub tenant_name: String,
    pub workspace_name: String,
    pub workspace_ns_count: usize,
    pub traffic_group_count: usize,
    pub traffic_group_ns_count: usize,
    pub gateway_group_count: usize,
    pub gateway_group_ns_count: usize,
    pub total_ns_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Raw per-workspace counts gathered during traversal.
pub struct WorkspaceCounts {
    pub workspace_ns: usize,
    pub traffic_groups: usize,
    pub traffic_group_ns: usize,
    pub gateway_groups: usize,
    pub gateway_group_ns: usize,
}

impl WorkspaceReport {
    pub fn new(
        tenant_name: impl Into<String>,
        workspace_name: impl Into<String>,
        counts: WorkspaceCounts,
    ) -> Self {
        Self {
            tenant_name: tenant_name.into(),
            workspace_name: workspace_name.into(),
            workspace_ns_count: counts.workspace_ns,
            traffic_group_count: counts.traffic_groups,
            traffic_group_ns_count: counts.traffic_group_ns,
            gateway_group_count: counts.gateway_groups,
            gateway_group_ns_count: counts.gateway_group_ns,
            total_ns_count: counts.workspace_ns + counts.traffic_group_ns + counts.gateway_group_ns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
/// Group instances seen across all processed workspaces.
pub struct GroupTotals {
    pub traffic_groups: usize,
    pub gateway_groups: usize,
}

impl GroupTotals {
    pub fn record(&mut self, report: &WorkspaceReport) {
        self.traffic_groups += report.traffic_group_count;
        self.gateway_groups += report.gateway_group_count;
    }

    pub fn total(&self) -> usize {
        self.traffic_groups + self.gateway_groups
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregateTotals {
    pub total_workspaces: usize,
    pub total_traffic_groups: usize,
    pub total_gateway_groups: usize,
    pub total_groups: usize,
    pub total_workspace_ns: usize,
    pub total_traffic_group_ns: usize,
    pub total_gateway_group_ns: usize,
    pub total_all_ns: usize,
}

use crate::report::{AggregateTotals, WorkspaceReport};

pub fn aggregate(reports: &[WorkspaceReport]) -> AggregateTotals {
    let mut totals = reports
        .iter()
        .fold(AggregateTotals::default(), |mut totals, report| {
            totals.total_workspaces += 1;
            totals.total_traffic_groups += report.traffic_group_count;
            totals.total_gateway_groups += report.gateway_group_count;
            totals.total_workspace_ns += report.workspace_ns_count;
            totals.total_traffic_group_ns += report.traffic_group_ns_count;
            totals.total_gateway_group_ns += report.gateway_group_ns_count;
            totals.total_all_ns += report.total_ns_count;
            totals
        });
    totals.total_groups = totals.total_traffic_groups + totals.total_gateway_groups;
    totals
}

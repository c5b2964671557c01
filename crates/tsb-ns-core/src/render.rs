use std::cmp::Ordering;

use serde::Serialize;

use crate::report::{AggregateTotals, GroupTotals, WorkspaceReport};

const RULE_WIDTH: usize = 92;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Report ordering: total namespaces descending, then workspace short name
/// ascending. Full ties keep discovery order.
pub fn compare_reports(left: &WorkspaceReport, right: &WorkspaceReport) -> Ordering {
    right
        .total_ns_count
        .cmp(&left.total_ns_count)
        .then_with(|| left.workspace_name.cmp(&right.workspace_name))
}

pub fn sort_reports(reports: &mut [WorkspaceReport]) {
    reports.sort_by(compare_reports);
}

pub fn render_text(
    reports: &[WorkspaceReport],
    totals: &AggregateTotals,
    group_totals: &GroupTotals,
) -> String {
    let mut lines = vec![
        String::new(),
        "Namespace count per workspace and groups:".to_string(),
        String::new(),
        format!(
            "{:<15} {:<25} {:>7} {:>5} {:>7} {:>5} {:>7} {:>10}",
            "Tenant", "Workspace", "WS NS", "TG", "TG NS", "GG", "GG NS", "Total NS"
        ),
        "-".repeat(RULE_WIDTH),
    ];
    for report in reports {
        lines.push(format!(
            "{:<15} {:<25} {:>7} {:>5} {:>7} {:>5} {:>7} {:>10}",
            report.tenant_name,
            report.workspace_name,
            report.workspace_ns_count,
            report.traffic_group_count,
            report.traffic_group_ns_count,
            report.gateway_group_count,
            report.gateway_group_ns_count,
            report.total_ns_count,
        ));
    }
    lines.push(String::new());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push("SUMMARY".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Total workspaces: {}", totals.total_workspaces));
    lines.push(format!(
        "Total traffic groups: {}",
        group_totals.traffic_groups
    ));
    lines.push(format!(
        "Total gateway groups: {}",
        group_totals.gateway_groups
    ));
    lines.push(format!(
        "Total groups (traffic + gateway): {}",
        group_totals.total()
    ));
    lines.push(String::new());
    lines.push(format!(
        "Total workspace namespaces: {}",
        totals.total_workspace_ns
    ));
    lines.push(format!(
        "Total traffic group namespaces: {}",
        totals.total_traffic_group_ns
    ));
    lines.push(format!(
        "Total gateway group namespaces: {}",
        totals.total_gateway_group_ns
    ));
    lines.push(format!(
        "Total namespaces (all sources): {}",
        totals.total_all_ns
    ));
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    rows: &'a [WorkspaceReport],
    summary: AggregateTotals,
}

pub fn render_json(
    reports: &[WorkspaceReport],
    totals: &AggregateTotals,
    group_totals: &GroupTotals,
) -> Result<String, serde_json::Error> {
    let document = ReportDocument {
        rows: reports,
        summary: AggregateTotals {
            total_traffic_groups: group_totals.traffic_groups,
            total_gateway_groups: group_totals.gateway_groups,
            total_groups: group_totals.total(),
            ..*totals
        },
    };
    let mut encoded = serde_json::to_string_pretty(&document)?;
    encoded.push('\n');
    Ok(encoded)
}

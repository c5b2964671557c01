use thiserror::Error;

use crate::aggregate::aggregate;
use crate::entity::{EntityError, Fqn};
use crate::fetch::EntityFetcher;
use crate::render::{render_json, render_text, sort_reports, ReportFormat};
use crate::report::{AggregateTotals, GroupTotals, WorkspaceReport};
use crate::walker::{HierarchyWalker, TenantFailurePolicy, WalkDiagnostic, WalkError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid organization: {0}")]
    Organization(#[from] EntityError),
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error("failed to encode report: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub organization: String,
    pub tenant_failure_policy: TenantFailurePolicy,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Sorted rows plus summary data for one traversal.
pub struct NamespaceReport {
    pub rows: Vec<WorkspaceReport>,
    pub totals: AggregateTotals,
    pub group_totals: GroupTotals,
    pub diagnostics: Vec<WalkDiagnostic>,
}

impl NamespaceReport {
    pub fn render(&self, format: ReportFormat) -> Result<String, RunError> {
        match format {
            ReportFormat::Text => Ok(render_text(&self.rows, &self.totals, &self.group_totals)),
            ReportFormat::Json => Ok(render_json(
                &self.rows,
                &self.totals,
                &self.group_totals,
            )?),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub report: String,
    pub diagnostics: Vec<WalkDiagnostic>,
}

pub fn generate_report<F: EntityFetcher + ?Sized>(
    fetcher: &F,
    organization: &str,
    policy: TenantFailurePolicy,
) -> Result<NamespaceReport, RunError> {
    let organization = Fqn::organization(organization)?;
    let outcome = HierarchyWalker::new(fetcher, policy).walk(&organization)?;
    let totals = aggregate(&outcome.reports);
    let mut rows = outcome.reports;
    sort_reports(&mut rows);
    Ok(NamespaceReport {
        rows,
        totals,
        group_totals: outcome.group_totals,
        diagnostics: outcome.diagnostics,
    })
}

/// Walks the organization and renders the report in the requested format.
pub fn run<F: EntityFetcher + ?Sized>(
    fetcher: &F,
    options: &RunOptions,
) -> Result<RunOutput, RunError> {
    let report = generate_report(
        fetcher,
        &options.organization,
        options.tenant_failure_policy,
    )?;
    Ok(RunOutput {
        report: report.render(options.format)?,
        diagnostics: report.diagnostics,
    })
}

//! Namespace-count reporting over the management API hierarchy.
//!
//! Walks tenants, workspaces, traffic groups and gateway groups through an
//! [`EntityFetcher`], counts the namespaces each entity selects, and renders
//! a sorted per-workspace table with summary totals.

mod aggregate;
mod counter;
mod entity;
mod fetch;
mod render;
mod report;
mod runner;
#[cfg(test)]
mod test_support;
mod walker;

pub use aggregate::aggregate;
pub use counter::{count_namespaces, sum_namespaces};
pub use entity::{EntityError, EntityKind, EntityRecord, Fqn};
pub use fetch::{parse_listing, EntityFetcher, FetchError};
pub use render::{compare_reports, render_json, render_text, sort_reports, ReportFormat};
pub use report::{AggregateTotals, GroupTotals, WorkspaceCounts, WorkspaceReport};
pub use runner::{generate_report, run, NamespaceReport, RunError, RunOptions, RunOutput};
pub use walker::{
    DiagnosticScope, HierarchyWalker, TenantFailurePolicy, WalkDiagnostic, WalkError, WalkOutcome,
};

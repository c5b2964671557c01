use clap::{Parser, ValueEnum};
use tsb_ns_client::DEFAULT_REQUEST_TIMEOUT_MS;
use tsb_ns_core::{ReportFormat, TenantFailurePolicy};

pub(crate) const DEFAULT_HOST: &str = "tsb.tfc.dogfood.sandbox.tetrate.io";
pub(crate) const DEFAULT_ORG: &str = "tfc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CliTenantFailurePolicy {
    Isolate,
    FailFast,
}

impl From<CliTenantFailurePolicy> for TenantFailurePolicy {
    fn from(value: CliTenantFailurePolicy) -> Self {
        match value {
            CliTenantFailurePolicy::Isolate => TenantFailurePolicy::Isolate,
            CliTenantFailurePolicy::FailFast => TenantFailurePolicy::FailFast,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CliReportFormat {
    Text,
    Json,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(value: CliReportFormat) -> Self {
        match value {
            CliReportFormat::Text => ReportFormat::Text,
            CliReportFormat::Json => ReportFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tsb-ns-report",
    about = "Review number of namespaces for each workspace and its groups.",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        env = "TSB_HOST",
        default_value = DEFAULT_HOST,
        help = "Management plane host name"
    )]
    pub(crate) host: String,

    #[arg(
        long,
        env = "TSB_API_BASE",
        help = "Base URL overriding https://<host>, e.g. http://127.0.0.1:8080"
    )]
    pub(crate) api_base: Option<String>,

    #[arg(long, env = "TSB_ORG", default_value = DEFAULT_ORG, help = "Organization name")]
    pub(crate) org: String,

    #[arg(
        long,
        env = "TSB_TOKEN",
        hide_env_values = true,
        help = "Bearer token for the management API"
    )]
    pub(crate) token: Option<String>,

    #[arg(
        long,
        env = "TSB_REQUEST_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_MS,
        help = "Per-request timeout in milliseconds"
    )]
    pub(crate) request_timeout_ms: u64,

    #[arg(
        long,
        env = "TSB_INSECURE_SKIP_VERIFY",
        help = "Skip TLS certificate verification"
    )]
    pub(crate) insecure_skip_verify: bool,

    #[arg(
        long,
        value_enum,
        default_value = "isolate",
        help = "Skip a tenant whose workspaces cannot be listed, or abort the run"
    )]
    pub(crate) tenant_failure_policy: CliTenantFailurePolicy,

    #[arg(long, value_enum, default_value = "text", help = "Report output format")]
    pub(crate) output: CliReportFormat,

    #[arg(long, help = "Enable debug output")]
    pub(crate) debug: bool,
}

impl Cli {
    pub(crate) fn resolved_api_base(&self) -> String {
        match self
            .api_base
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            Some(api_base) => api_base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.host.trim()),
        }
    }
}

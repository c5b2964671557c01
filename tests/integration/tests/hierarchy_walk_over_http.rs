use std::cell::RefCell;

use httpmock::prelude::*;
use serde_json::json;
use tsb_ns_client::{TsbClient, TsbClientConfig};
use tsb_ns_core::{
    generate_report, EntityFetcher, EntityKind, EntityRecord, FetchError, TenantFailurePolicy,
};

const ORG: &str = "organizations/tfc";
const T1: &str = "organizations/tfc/tenants/t1";
const T2: &str = "organizations/tfc/tenants/t2";

struct RecordingFetcher<F> {
    inner: F,
    calls: RefCell<Vec<(EntityKind, String)>>,
}

impl<F: EntityFetcher> RecordingFetcher<F> {
    fn new(inner: F) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(EntityKind, String)> {
        self.calls.borrow().clone()
    }
}

impl<F: EntityFetcher> EntityFetcher for RecordingFetcher<F> {
    fn fetch_children(
        &self,
        kind: EntityKind,
        parent_fqn: &str,
    ) -> Result<Vec<EntityRecord>, FetchError> {
        self.calls.borrow_mut().push((kind, parent_fqn.to_string()));
        self.inner.fetch_children(kind, parent_fqn)
    }
}

fn client_for(server: &MockServer) -> TsbClient {
    TsbClient::new(TsbClientConfig {
        api_base: server.base_url(),
        token: "integration-token".to_string(),
        request_timeout_ms: 5_000,
        insecure_skip_verify: false,
    })
    .expect("client should be created")
}

fn workspace_fqn(tenant: &str, name: &str) -> String {
    format!("{tenant}/workspaces/{name}")
}

fn mock_listing(server: &MockServer, path: String, body: serde_json::Value) {
    server.mock(|when, then| {
        when.method(GET)
            .path(path.as_str())
            .header("authorization", "Bearer integration-token");
        then.status(200).json_body(body);
    });
}

#[test]
fn integration_walks_two_tenants_sequentially_and_sorts_rows() {
    let server = MockServer::start();
    let beta = workspace_fqn(T1, "beta");
    let alpha2 = workspace_fqn(T2, "alpha2");
    let alpha = workspace_fqn(T2, "alpha");

    mock_listing(
        &server,
        format!("/v2/{ORG}/tenants"),
        json!({"tenants": [{"fqn": T1}, {"fqn": T2}]}),
    );
    mock_listing(
        &server,
        format!("/v2/{T1}/workspaces"),
        json!({"workspaces": [{"fqn": beta, "namespaceSelector": {"names": ["a", "b", "c", "d"]}}]}),
    );
    mock_listing(
        &server,
        format!("/v2/{T2}/workspaces"),
        json!({"workspaces": [
            {"fqn": alpha, "namespaceSelector": {"names": ["a"]}},
            {"fqn": alpha2}
        ]}),
    );
    mock_listing(
        &server,
        format!("/v2/{beta}/trafficgroups"),
        json!({"groups": [
            {"fqn": "tg1", "namespaceSelector": {"names": ["e", "f", "g"]}},
            {"fqn": "tg2", "namespaceSelector": {"names": ["h", "i", "j"]}}
        ]}),
    );
    mock_listing(&server, format!("/v2/{beta}/gatewaygroups"), json!({"groups": []}));
    mock_listing(&server, format!("/v2/{alpha}/trafficgroups"), json!({}));
    mock_listing(
        &server,
        format!("/v2/{alpha}/gatewaygroups"),
        json!({"groups": [{"fqn": "gg1", "namespaceSelector": {"names": ["k", "l", "m", "n"]}}]}),
    );
    mock_listing(&server, format!("/v2/{alpha2}/trafficgroups"), json!({"groups": []}));
    mock_listing(
        &server,
        format!("/v2/{alpha2}/gatewaygroups"),
        json!({"groups": [{"fqn": "gg2", "namespaceSelector": {"names": vec!["x"; 10]}}]}),
    );

    let fetcher = RecordingFetcher::new(client_for(&server));
    let report = generate_report(&fetcher, "tfc", TenantFailurePolicy::Isolate)
        .expect("report should build");

    let rows = report
        .rows
        .iter()
        .map(|row| {
            (
                row.tenant_name.as_str(),
                row.workspace_name.as_str(),
                row.total_ns_count,
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![("t2", "alpha2", 10), ("t1", "beta", 10), ("t2", "alpha", 5)]
    );
    assert_eq!(report.totals.total_workspaces, 3);
    assert_eq!(report.totals.total_all_ns, 25);
    assert_eq!(report.group_totals.traffic_groups, 2);
    assert_eq!(report.group_totals.gateway_groups, 2);
    assert!(report.diagnostics.is_empty());

    let expected_calls = vec![
        (EntityKind::Tenant, ORG.to_string()),
        (EntityKind::Workspace, T1.to_string()),
        (EntityKind::TrafficGroup, beta.clone()),
        (EntityKind::GatewayGroup, beta.clone()),
        (EntityKind::Workspace, T2.to_string()),
        (EntityKind::TrafficGroup, alpha.clone()),
        (EntityKind::GatewayGroup, alpha.clone()),
        (EntityKind::TrafficGroup, alpha2.clone()),
        (EntityKind::GatewayGroup, alpha2.clone()),
    ];
    assert_eq!(fetcher.calls(), expected_calls);
}

#[test]
fn integration_unreachable_group_endpoints_yield_zero_counts() {
    let server = MockServer::start();
    let w1 = workspace_fqn(T1, "w1");
    mock_listing(
        &server,
        format!("/v2/{ORG}/tenants"),
        json!({"tenants": [{"fqn": T1}]}),
    );
    mock_listing(
        &server,
        format!("/v2/{T1}/workspaces"),
        json!({"workspaces": [{"fqn": w1, "namespaceSelector": {"names": ["a", "b"]}}]}),
    );
    server.mock(|when, then| {
        when.method(GET).path(format!("/v2/{w1}/trafficgroups"));
        then.status(404).body("not found");
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/v2/{w1}/gatewaygroups"));
        then.status(200).body("not json");
    });

    let report = generate_report(&client_for(&server), "tfc", TenantFailurePolicy::FailFast)
        .expect("group failures are tolerated");

    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.workspace_ns_count, 2);
    assert_eq!(row.traffic_group_count, 0);
    assert_eq!(row.gateway_group_count, 0);
    assert_eq!(row.total_ns_count, 2);
    assert_eq!(report.group_totals.total(), 0);
}

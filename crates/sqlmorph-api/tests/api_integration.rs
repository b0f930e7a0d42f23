use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use sqlmorph_ai::{CompletionClient, Prompt};
use sqlmorph_api::{create_router, AppState};
use sqlmorph_core::SqlMorphError;

struct MockClient {
    reply: &'static str,
    calls: Mutex<usize>,
}

impl MockClient {
    fn new(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(0),
        })
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, _prompt: &Prompt) -> sqlmorph_core::Result<String> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.reply.trim().to_string())
    }
}

struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, _prompt: &Prompt) -> sqlmorph_core::Result<String> {
        Err(SqlMorphError::Completion("upstream said no".into()))
    }
}

fn test_server(client: Arc<dyn CompletionClient>) -> TestServer {
    let app = create_router(AppState::with_client(client));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = test_server(MockClient::new(""));

    let resp = server.get("/health").await;
    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn info_lists_supported_databases_and_endpoints() {
    let server = test_server(MockClient::new(""));

    let resp = server.get("/").await;
    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    let databases = body["supported_databases"].as_array().unwrap();
    assert_eq!(databases.len(), 3);
    assert!(databases.contains(&json!("sqlserver")));
    assert!(databases.contains(&json!("postgresql")));
    assert!(databases.contains(&json!("mysql")));
    assert!(body["endpoints"]["/convert"].is_string());
}

#[tokio::test]
async fn identity_conversion_bypasses_the_completion_endpoint() {
    let client = MockClient::new("should never be returned");
    let server = test_server(client.clone());

    let source = "  SELECT *\nFROM t  ";
    let resp = server
        .post("/convert")
        .json(&json!({
            "source_code": source,
            "source_type": "mysql",
            "target_type": "mysql"
        }))
        .await;

    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["converted_code"], source);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn plain_query_conversion_round_trip() {
    let client = MockClient::new("\n  SELECT 1;  \n");
    let server = test_server(client.clone());

    let resp = server
        .post("/convert")
        .json(&json!({
            "source_code": "SELECT 1",
            "source_type": "mysql",
            "target_type": "postgresql"
        }))
        .await;

    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["converted_code"], "SELECT 1;");
    assert_eq!(body["source_type"], "mysql");
    assert_eq!(body["target_type"], "postgresql");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn routine_conversion_round_trip() {
    let client = MockClient::new("CREATE OR REPLACE FUNCTION get_thing() ...");
    let server = test_server(client.clone());

    let resp = server
        .post("/convert")
        .json(&json!({
            "source_code": "CREATE PROCEDURE dbo.GetThing AS BEGIN SELECT 1 END",
            "source_type": "sqlserver",
            "target_type": "postgresql"
        }))
        .await;

    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(
        body["converted_code"],
        "CREATE OR REPLACE FUNCTION get_thing() ..."
    );
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    let server = test_server(Arc::new(FailingClient));

    let resp = server
        .post("/convert")
        .json(&json!({
            "source_code": "SELECT 1",
            "source_type": "mysql",
            "target_type": "postgresql"
        }))
        .await;

    assert_eq!(resp.status_code(), 502);
    let body: serde_json::Value = resp.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("upstream said no"));
}

#[tokio::test]
async fn unknown_dialect_is_rejected_at_the_boundary() {
    let client = MockClient::new("should never be returned");
    let server = test_server(client.clone());

    let resp = server
        .post("/convert")
        .json(&json!({
            "source_code": "SELECT 1",
            "source_type": "oracle",
            "target_type": "postgresql"
        }))
        .await;

    assert_eq!(resp.status_code(), 422);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn optimize_round_trip() {
    let client = MockClient::new("-- uses covering index\nSELECT 1;");
    let server = test_server(client.clone());

    let resp = server
        .post("/optimize")
        .json(&json!({
            "sql_code": "SELECT 1",
            "sql_type": "postgresql"
        }))
        .await;

    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(
        body["optimized_code"],
        "-- uses covering index\nSELECT 1;"
    );
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn samples_catalog_is_served_per_dialect() {
    let server = test_server(MockClient::new(""));

    let resp = server.get("/examples/postgresql").await;
    assert_eq!(resp.status_code(), 200);
    let body: serde_json::Value = resp.json();
    assert_eq!(body["dialect"], "postgresql");
    assert_eq!(body["samples"].as_array().unwrap().len(), 3);
    assert!(body["samples"][0]["snippet"]
        .as_str()
        .unwrap()
        .contains("CREATE OR REPLACE FUNCTION"));

    let resp = server.get("/examples/oracle").await;
    assert_eq!(resp.status_code(), 400);
}

use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

use qualityboard_nav::api::handlers::AppState;
use qualityboard_nav::api::routes::create_router;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(&format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
    }

    async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(&format!("{}{}", self.base_url, path))
            .send()
            .await
    }
}

// Serve the router on an ephemeral port so the test needs no environment
async fn spawn_service() -> TestClient {
    let state = Arc::new(AppState {
        base_url: "http://quality.example.com".to_string(),
    });
    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn test_navigation_service_workflow() {
    let client = spawn_service().await;

    // 1. Health check
    let response = client.get("/health").await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");

    // 2. Full navigation for a project admin
    let request = json!({
        "component": {
            "key": "my:project",
            "qualifier": "TRK",
            "extensions": [
                {"key": "ext-a", "name": "Foo"},
                {"key": "ext-b", "name": "Governance"}
            ]
        },
        "configuration": {
            "show_settings": true,
            "show_quality_profiles": true,
            "show_quality_gates": true,
            "show_manual_measures": true,
            "show_links": true,
            "show_permissions": true,
            "show_background_tasks": true,
            "show_update_key": true
        },
        "branches_enabled": true
    });
    let response = client.post("/api/navigation/component", request).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let entries = body["entries"].as_array().unwrap();

    let keys: Vec<&str> = entries
        .iter()
        .map(|entry| entry["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["overview", "issues", "measures", "code", "activity", "administration", "more"]
    );

    // the "more" menu filters Governance out, the admin drop-down is full
    let more = entries.last().unwrap();
    let more_labels: Vec<&str> = more["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["label"].as_str().unwrap())
        .collect();
    assert_eq!(more_labels, vec!["Foo"]);

    let admin = &entries[5];
    let admin_keys: Vec<&str> = admin["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["key"].as_str().unwrap())
        .collect();
    assert!(admin_keys.contains(&"branches"));
    assert!(admin_keys.contains(&"project_delete"));

    // query values stay raw in the descriptor
    assert_eq!(entries[0]["target"]["query"]["id"], "my:project");

    // 3. Short-lived branch suppresses the dashboard-style entries
    let request = json!({
        "component": {"key": "my:project", "qualifier": "TRK"},
        "branch": {"name": "feature/x", "kind": "shortlived", "merge_branch": "master"},
        "configuration": {"show_settings": true},
        "branches_enabled": true
    });
    let response = client.post("/api/navigation/component", request).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let keys: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["issues", "code"]);

    // 4. A short-lived branch without a merge target is rejected
    let request = json!({
        "component": {"key": "my:project", "qualifier": "TRK"},
        "branch": {"name": "feature/x", "kind": "shortlived"}
    });
    let response = client.post("/api/navigation/component", request).await.unwrap();
    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("merge target"));

    // 5. Settings navigation resolves the active section
    let request = json!({
        "extensions": [{"key": "license-usage", "name": "License Usage"}],
        "custom_organizations": false,
        "current_path": "/admin/background_tasks"
    });
    let response = client.post("/api/navigation/settings", request).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    let projects = sections
        .iter()
        .find(|section| section["key"] == "projects")
        .unwrap();
    assert_eq!(projects["active"], true);
    let configuration = sections
        .iter()
        .find(|section| section["key"] == "configuration")
        .unwrap();
    assert_eq!(configuration["active"], false);
    let last_link = configuration["links"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last_link["pathname"], "/admin/extension/license-usage");

    // 6. System links carry the configured base URL
    let response = client
        .get("/api/system/links?can_download_logs=true")
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["info"]["url"],
        "http://quality.example.com/api/system/info"
    );
    assert_eq!(body["info"]["filename"], "qualityboard_system_info.json");
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 4);
    assert_eq!(
        logs[3]["url"],
        "http://quality.example.com/api/system/logs?process=web"
    );

    let response = client.get("/api/system/links").await.unwrap();
    let body: Value = response.json().await.unwrap();
    assert!(body.get("logs").is_none());
}

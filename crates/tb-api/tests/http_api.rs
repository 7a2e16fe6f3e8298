//! End-to-end HTTP tests.
//!
//! Each test binds a real listener on an ephemeral port, serves the router
//! over an in-memory store and drives it with reqwest.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use tb_api::caller::CALLER_HEADER;
use tb_config::ServerConfig;
use tb_db::{IN_MEMORY, TaskService};

struct TestApp {
    base: String,
    client: Client,
}

impl TestApp {
    async fn spawn() -> Self {
        let service = Arc::new(TaskService::new_local(IN_MEMORY).await.unwrap());
        let app = tb_api::router(service, &ServerConfig::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn create(&self, title: &str, creator: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/tasks"))
            .header(CALLER_HEADER, creator)
            .json(&json!({ "title": title, "description": format!("{title} details") }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        resp.json().await.unwrap()
    }

    async fn patch(&self, path: &str, caller: &str) -> (StatusCode, Value) {
        let resp = self
            .client
            .patch(self.url(path))
            .header(CALLER_HEADER, caller)
            .send()
            .await
            .unwrap();
        (resp.status(), resp.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        (resp.status(), resp.json().await.unwrap())
    }
}

#[tokio::test]
async fn health_responds() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn create_returns_open_task() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/tasks"))
        .header(CALLER_HEADER, "0xA")
        .json(&json!({
            "title": "Fix bug",
            "description": "Crash on startup",
            "priority": "high",
            "dueDate": "2025-10-01",
            "estimatedHours": "3",
            "reward": { "amount": "0.5", "token": "SHM" },
            "tags": ["wallet", ""],
            "assignee": "0xEVE"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    let task = &body["task"];
    assert_eq!(task["status"], "open");
    assert_eq!(task["creator"], "0xA");
    assert_eq!(task["assignee"], Value::Null);
    assert_eq!(task["reward"]["amount"], 0.5);
    assert_eq!(task["tags"], json!(["wallet"]));
}

#[tokio::test]
async fn create_prefers_body_creator() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/tasks"))
        .json(&json!({ "title": "t", "description": "d", "creator": "0xBODY" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["task"]["creator"], "0xBODY");
}

#[tokio::test]
async fn create_without_caller_or_title_is_bad_request() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .post(app.url("/tasks"))
        .json(&json!({ "title": "t", "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["kind"], "validation");

    let resp = app
        .client
        .post(app.url("/tasks"))
        .header(CALLER_HEADER, "0xA")
        .json(&json!({ "title": " ", "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_bad_request_envelope() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .post(app.url("/tasks"))
        .header(CALLER_HEADER, "0xA")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["kind"], "validation");
}

#[tokio::test]
async fn fix_bug_scenario_over_http() {
    let app = TestApp::spawn().await;
    let created = app.create("Fix bug", "0xA").await;
    let id = created["task"]["id"].as_i64().unwrap();

    let (status, body) = app.patch(&format!("/tasks/{id}/accept"), "0xB").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], "in_progress");
    assert_eq!(body["task"]["assignee"], "0xB");

    let (status, body) = app.patch(&format!("/tasks/{id}/accept"), "0xC").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["kind"], "conflict");
    assert_eq!(body["error"]["reason"], "already_assigned");
    assert_eq!(body["error"]["retryable"], false);
    assert_eq!(body["message"], "Task already assigned to: 0xB");

    let (status, body) = app.patch(&format!("/tasks/{id}/complete"), "0xC").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["reason"], "not_owner");

    let (status, body) = app.patch(&format!("/tasks/{id}/complete"), "0xB").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], "completed");

    let (status, body) = app.patch(&format!("/tasks/{id}/complete"), "0xB").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["reason"], "not_in_progress");

    let (status, body) = app.get("/transactions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["transactions"][0]["task_id"], id);
    assert_eq!(body["transactions"][0]["transaction_type"], "task_completed");
}

#[tokio::test]
async fn accept_without_caller_is_bad_request() {
    let app = TestApp::spawn().await;
    let created = app.create("t", "0xA").await;
    let id = created["task"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .patch(app.url(&format!("/tasks/{id}/accept")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_task_is_not_found() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/tasks/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["kind"], "not_found");

    let (status, _) = app.patch("/tasks/404/accept", "0xB").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = TestApp::spawn().await;
    let (status, body) = app.get("/tasks/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn list_filters_and_stats() {
    let app = TestApp::spawn().await;
    let a = app.create("first", "0xA").await["task"]["id"].as_i64().unwrap();
    app.create("second", "0xA").await;
    app.patch(&format!("/tasks/{a}/accept"), "0xB").await;

    let (status, body) = app.get("/tasks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tasks"].as_array().unwrap().len(), 2);
    assert_eq!(body["tasks"][0]["title"], "second");

    let (_, body) = app.get("/tasks?status=in_progress").await;
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], a);

    let (_, body) = app.get("/tasks?search=seco&limit=5").await;
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);

    let (status, body) = app.get("/tasks?status=review").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "validation");

    let (status, body) = app.get("/tasks/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["stats"],
        json!({ "open": 1, "in_progress": 1, "completed": 0, "total": 2 })
    );
}

#[tokio::test]
async fn status_override_and_delete() {
    let app = TestApp::spawn().await;
    let id = app.create("t", "0xA").await["task"]["id"].as_i64().unwrap();

    let resp = app
        .client
        .put(app.url(&format!("/tasks/{id}")))
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["task"]["status"], "completed");

    let resp = app
        .client
        .delete(app.url(&format!("/tasks/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .client
        .delete(app.url(&format!("/tasks/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn().await;
    let resp = app
        .client
        .get(app.url("/tasks"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

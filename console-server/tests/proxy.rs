use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use console_server::proxy::{admin_router, ProxyState};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn stub_backend() -> Router {
    Router::new()
        .route(
            "/admin/models",
            get(|| async {
                Json(serde_json::json!([{
                    "id": "m-1",
                    "provider": "openrouter",
                    "model_name": "x-ai/grok-beta",
                    "priority": 1,
                    "enabled": true,
                    "use_case": "generation"
                }]))
            })
            .post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({ "saved": body })),
                )
            }),
        )
        .route(
            "/admin/tasks/:id",
            get(|Path(id): Path<String>| async move {
                (
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "error": format!("unknown task {id}") })),
                )
            }),
        )
}

async fn spawn_proxy(backend_url: &str) -> String {
    spawn(admin_router(ProxyState::new(backend_url))).await
}

#[tokio::test]
async fn forwards_model_list_from_backend() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::get(format!("{proxy}/api/admin/models"))
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body[0]["model_name"], "x-ai/grok-beta");
}

#[tokio::test]
async fn forwards_save_body_and_created_status() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let payload = serde_json::json!({ "models": [{ "model_name": "glm-4", "priority": 1 }] });
    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/admin/models"))
        .json(&payload)
        .send()
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["saved"], payload);
}

#[tokio::test]
async fn passes_backend_error_status_through() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::get(format!("{proxy}/api/admin/tasks/t-404"))
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["error"], "unknown task t-404");
}

#[tokio::test]
async fn unreachable_backend_becomes_generic_500() {
    // Nothing listens on port 9; connection is refused immediately.
    let proxy = spawn_proxy("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("{proxy}/api/admin/sources"))
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["error"], "backend unreachable");
}

#[tokio::test]
async fn debug_probe_reports_backend_and_status() {
    let backend = spawn(stub_backend()).await;
    let proxy = spawn_proxy(&backend).await;

    let response = reqwest::get(format!("{proxy}/api/debug"))
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["status"], "success");
    assert_eq!(body["backend_url"], backend);
    assert_eq!(body["response_status"], 200);
}

#[tokio::test]
async fn debug_probe_surfaces_unreachable_backend() {
    let proxy = spawn_proxy("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("{proxy}/api/debug"))
        .await
        .expect("request");
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("json");
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().is_some());
}

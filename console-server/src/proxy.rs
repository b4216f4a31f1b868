use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use reqwest::Method;

/// Shared handler context. Built once at startup; no module-level globals.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: &str) -> ProxyState {
        ProxyState {
            client: reqwest::Client::new(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn target(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }
}

pub fn admin_router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/admin/models", get(list_models).post(save_models))
        .route("/api/admin/sources", get(list_sources).post(create_source))
        .route("/api/admin/sources/:id", delete(delete_source))
        .route("/api/admin/prompts", post(save_prompt))
        .route("/api/admin/prompts/:kind", get(get_prompt))
        .route("/api/admin/jurisdictions", get(list_jurisdictions))
        .route(
            "/api/admin/jurisdictions/:id/dashboard",
            get(jurisdiction_dashboard),
        )
        .route("/api/admin/scrape", post(trigger_scrape))
        .route("/api/admin/analyze", post(run_analysis))
        .route("/api/admin/tasks/:task_id", get(task_status))
        .route("/api/debug", get(debug_probe))
        .with_state(state)
}

type ProxyResponse = (StatusCode, Json<serde_json::Value>);

/// Forward one request to the backend, passing the status code and JSON body
/// through unchanged. Network failure becomes a generic 500 with an error
/// body.
async fn forward(
    state: &ProxyState,
    method: Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> ProxyResponse {
    let url = state.target(path);
    let mut request = state.client.request(method.clone(), &url);
    if let Some(body) = body {
        request = request.json(body);
    }

    match request.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let body = response.json::<serde_json::Value>().await.unwrap_or_else(|e| {
                serde_json::json!({ "error": format!("invalid JSON from backend: {e}") })
            });
            (status, Json(body))
        }
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "backend unreachable" })),
            )
        }
    }
}

async fn list_models(State(state): State<ProxyState>) -> ProxyResponse {
    forward(&state, Method::GET, "/admin/models", None).await
}

async fn save_models(
    State(state): State<ProxyState>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResponse {
    forward(&state, Method::POST, "/admin/models", Some(&body)).await
}

async fn list_sources(State(state): State<ProxyState>) -> ProxyResponse {
    forward(&state, Method::GET, "/admin/sources", None).await
}

async fn create_source(
    State(state): State<ProxyState>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResponse {
    forward(&state, Method::POST, "/admin/sources", Some(&body)).await
}

async fn delete_source(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
) -> ProxyResponse {
    forward(&state, Method::DELETE, &format!("/admin/sources/{id}"), None).await
}

async fn get_prompt(
    State(state): State<ProxyState>,
    Path(kind): Path<String>,
) -> ProxyResponse {
    forward(&state, Method::GET, &format!("/admin/prompts/{kind}"), None).await
}

async fn save_prompt(
    State(state): State<ProxyState>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResponse {
    forward(&state, Method::POST, "/admin/prompts", Some(&body)).await
}

async fn list_jurisdictions(State(state): State<ProxyState>) -> ProxyResponse {
    forward(&state, Method::GET, "/admin/jurisdictions", None).await
}

async fn jurisdiction_dashboard(
    State(state): State<ProxyState>,
    Path(id): Path<String>,
) -> ProxyResponse {
    forward(
        &state,
        Method::GET,
        &format!("/admin/jurisdictions/{id}/dashboard"),
        None,
    )
    .await
}

async fn trigger_scrape(
    State(state): State<ProxyState>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResponse {
    forward(&state, Method::POST, "/admin/scrape", Some(&body)).await
}

async fn run_analysis(
    State(state): State<ProxyState>,
    Json(body): Json<serde_json::Value>,
) -> ProxyResponse {
    forward(&state, Method::POST, "/admin/analyze", Some(&body)).await
}

async fn task_status(
    State(state): State<ProxyState>,
    Path(task_id): Path<String>,
) -> ProxyResponse {
    forward(&state, Method::GET, &format!("/admin/tasks/{task_id}"), None).await
}

/// Deployment diagnostic: reports the configured backend URL together with
/// the outcome of a live probe against it.
async fn debug_probe(State(state): State<ProxyState>) -> ProxyResponse {
    let url = state.target("/admin/models");
    match state.client.get(&url).send().await {
        Ok(response) => {
            let response_status = response.status().as_u16();
            let data = response.json::<serde_json::Value>().await.unwrap_or_else(|e| {
                serde_json::json!({ "error": format!("failed to parse JSON: {e}") })
            });
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "status": "success",
                    "backend_url": state.backend_url,
                    "response_status": response_status,
                    "data": data,
                })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "status": "error",
                "backend_url": state.backend_url,
                "error": e.to_string(),
            })),
        ),
    }
}

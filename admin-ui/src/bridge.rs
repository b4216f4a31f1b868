//! Typed fetch wrappers over the console-server proxy routes.

use console_core::models::ModelConfig;
use console_core::pipeline::{
    AnalysisRequest, Jurisdiction, JurisdictionStats, ScrapeRequest, ScrapeTask, TaskStatus,
};
use console_core::prompts::{PromptConfig, PromptKind, PromptUpdate};
use console_core::sources::{NewSource, Source};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

async fn request<R>(method: &str, path: &str, body: Option<String>) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        let headers = Headers::new().map_err(|e| format!("headers: {e:?}"))?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("headers: {e:?}"))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&json));
    }

    let request =
        Request::new_with_str_and_init(path, &opts).map_err(|e| format!("bad request: {e:?}"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }

    let json = JsFuture::from(response.json().map_err(|e| format!("body: {e:?}"))?)
        .await
        .map_err(|e| format!("invalid JSON: {e:?}"))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

async fn get<R: DeserializeOwned>(path: &str) -> Result<R, String> {
    request("GET", path, None).await
}

async fn post<B: Serialize, R: DeserializeOwned>(path: &str, body: &B) -> Result<R, String> {
    let json = serde_json::to_string(body).map_err(|e| e.to_string())?;
    request("POST", path, Some(json)).await
}

pub async fn fetch_models() -> Result<Vec<ModelConfig>, String> {
    get("/api/admin/models").await
}

pub async fn save_models(models: &[ModelConfig]) -> Result<(), String> {
    post::<_, serde_json::Value>("/api/admin/models", &serde_json::json!({ "models": models }))
        .await
        .map(|_| ())
}

pub async fn fetch_sources() -> Result<Vec<Source>, String> {
    get("/api/admin/sources").await
}

pub async fn create_source(source: &NewSource) -> Result<(), String> {
    post::<_, serde_json::Value>("/api/admin/sources", source)
        .await
        .map(|_| ())
}

pub async fn delete_source(id: &str) -> Result<(), String> {
    request::<serde_json::Value>("DELETE", &format!("/api/admin/sources/{id}"), None)
        .await
        .map(|_| ())
}

pub async fn fetch_prompt(kind: PromptKind) -> Result<PromptConfig, String> {
    get(&format!("/api/admin/prompts/{}", kind.as_str())).await
}

/// Returns the raw save response so the caller can report the new version
/// before reloading.
pub async fn save_prompt(update: &PromptUpdate) -> Result<serde_json::Value, String> {
    post("/api/admin/prompts", update).await
}

pub async fn fetch_jurisdictions() -> Result<Vec<Jurisdiction>, String> {
    get("/api/admin/jurisdictions").await
}

pub async fn fetch_dashboard(id: &str) -> Result<JurisdictionStats, String> {
    get(&format!("/api/admin/jurisdictions/{id}/dashboard")).await
}

pub async fn trigger_scrape(jurisdiction: &str, force: bool) -> Result<ScrapeTask, String> {
    post(
        "/api/admin/scrape",
        &ScrapeRequest {
            jurisdiction: jurisdiction.to_string(),
            force,
        },
    )
    .await
}

pub async fn run_analysis(request: &AnalysisRequest) -> Result<ScrapeTask, String> {
    post("/api/admin/analyze", request).await
}

pub async fn fetch_task(task_id: &str) -> Result<TaskStatus, String> {
    get(&format!("/api/admin/tasks/{task_id}")).await
}

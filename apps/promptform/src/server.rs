use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use promptform_core::{catalog, export_document, view, Session};
use promptform_dom::Snapshot;
use promptform_render_html::{render_page, PageOptions};

use crate::error::AppError;

/// Client runtime and styles — embedded at compile time, never user-visible
/// files on disk.
const CLIENT_JS: &str = include_str!("../assets/promptform.js");
const STYLE_CSS: &str = include_str!("../assets/promptform.css");

// ── Shared state ────────────────────────────────────────────────────

pub struct AppState {
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Mutex::new(Session::default_product()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ── Router ──────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/promptform.js", get(client_js))
        .route("/promptform.css", get(style_css))
        .route("/sse", get(sse))
        .route("/actions/set_field", post(set_field))
        .route("/actions/switch_product", post(switch_product))
        .route("/actions/copy_prompt", post(copy_prompt))
        .route("/export", get(export))
        .with_state(state)
}

// ── Request / Response types ────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetFieldRequest {
    pub key: String,
    pub value: String,
}

#[derive(Serialize)]
struct PromptPatch {
    prompts: HashMap<&'static str, String>,
}

#[derive(Deserialize)]
pub struct SwitchProductRequest {
    pub product: String,
}

#[derive(Serialize)]
struct OkResponse {
    ok: bool,
}

#[derive(Deserialize)]
pub struct CopyPromptRequest {
    pub key: String,
}

#[derive(Serialize)]
struct CopyPromptResponse {
    text: String,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let session = state.session.lock().unwrap();
    let page = render_page(&PageOptions {
        root: view::render_app(&session),
        title: Some("Assumption Form".to_string()),
        inline_css: Some(STYLE_CSS.to_string()),
        scripts: vec!["/promptform.js".to_string()],
        sse_url: Some("/sse".to_string()),
        mount_selector: None,
        inert: false,
    });
    Html(page)
}

async fn client_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        CLIENT_JS,
    )
}

async fn style_css() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLE_CSS,
    )
}

/// SSE feed: the connect-time snapshot, then keep-alives. Single-user app,
/// so there is no broadcast fan-out; a second tab resyncs on connect.
async fn sse(
    State(state): State<Arc<AppState>>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let snapshot = {
        let session = state.session.lock().unwrap();
        Snapshot {
            root: view::render_app(&session),
        }
    };
    let json = serde_json::to_string(&snapshot).map_err(|e| AppError::Internal(e.to_string()))?;
    let first = stream::once(async move { Ok(Event::default().event("message").data(json)) });
    Ok(Sse::new(first).keep_alive(KeepAlive::default()))
}

/// Field edit: update the session and hand back the recomposed prompt texts
/// so the client patches the existing blocks in place (no re-render, collapse
/// state preserved).
async fn set_field(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetFieldRequest>,
) -> Json<PromptPatch> {
    let mut session = state.session.lock().unwrap();
    session.set_field(&req.key, &req.value);
    debug!(key = %req.key, "field updated");

    let prompts = HashMap::from([
        ("partA", session.prompt("partA").to_string()),
        ("partB", session.prompt("partB").to_string()),
        ("partC", session.prompt("partC").to_string()),
    ]);
    Json(PromptPatch { prompts })
}

/// Product switch: full reset-and-rerender cascade — the client reloads the
/// page on success. Unknown products 404 and leave the session untouched.
async fn switch_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SwitchProductRequest>,
) -> Result<Json<OkResponse>, AppError> {
    let mut session = state.session.lock().unwrap();
    session.switch_product(&req.product)?;
    info!(product = %req.product, "product switched");
    Ok(Json(OkResponse { ok: true }))
}

/// Authoritative text for a copy action: exactly the named block's current
/// content. The clipboard write itself happens in the client runtime.
async fn copy_prompt(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CopyPromptRequest>,
) -> Result<Json<CopyPromptResponse>, AppError> {
    if !catalog::PROMPT_FIELDS.iter().any(|d| d.key == req.key) {
        return Err(AppError::NotFound(format!("unknown prompt: {}", req.key)));
    }
    let session = state.session.lock().unwrap();
    Ok(Json(CopyPromptResponse {
        text: session.prompt(&req.key).to_string(),
    }))
}

/// Snapshot download. Export reads the session without mutating it; a
/// failure is logged and surfaced as a 500, the live state stays intact.
async fn export(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let result = {
        let session = state.session.lock().unwrap();
        export_document(&session, Some(STYLE_CSS))
    };
    match result {
        Ok(doc) => {
            info!(filename = %doc.filename, bytes = doc.bytes.len(), "exported snapshot");
            let headers = [
                (header::CONTENT_TYPE, doc.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", doc.filename),
                ),
            ];
            Ok((headers, doc.bytes).into_response())
        }
        Err(e) => {
            warn!("export failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        router(Arc::new(AppState::new())).oneshot(req).await.unwrap()
    }

    async fn get_path(path: &str) -> axum::http::Response<Body> {
        send(Request::builder().uri(path).body(Body::empty()).unwrap()).await
    }

    #[tokio::test]
    async fn test_embedded_assets_served() {
        let resp = get_path("/promptform.js").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/javascript");

        let resp = get_path("/promptform.css").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn test_export_is_an_attachment() {
        let resp = get_path("/export").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"assumption-form-"));
    }

    #[tokio::test]
    async fn test_unknown_product_switch_is_404() {
        let req = Request::builder()
            .method("POST")
            .uri("/actions/switch_product")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"product":"Equity"}"#))
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

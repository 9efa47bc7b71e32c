use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use clipplan_core::{GeneratedPlan, PlanRequest, RequestError, compose_plan, match_niche};

use crate::config::{ClipplanConfig, SiteSection};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Shared, read-only state for handlers.
pub struct AppState {
    /// The planner page, rendered once at startup.
    index_html: String,
}

impl AppState {
    pub fn new(site: &SiteSection) -> Self {
        Self {
            index_html: render_index(site),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(config: &ClipplanConfig) -> Result<()> {
    let app = build_router(Arc::new(AppState::new(&config.site)));
    let addr: SocketAddr = format!("{}:{}", config.bind, config.port).parse()?;
    tracing::info!("clipplan serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("clipplan serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

static INDEX_TEMPLATE: &str = include_str!("index.html");

/// Fill the page template with HTML-escaped site metadata.
fn render_index(site: &SiteSection) -> String {
    INDEX_TEMPLATE
        .replace("{{title}}", &escape_html(&site.title))
        .replace("{{description}}", &escape_html(&site.description))
        .replace("{{theme_color}}", &escape_html(&site.theme_color))
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}

/// `POST /api/generate`: the body is parsed as JSON whatever its content type.
async fn generate(body: Bytes) -> Result<Json<GeneratedPlan>, AppError> {
    let request = PlanRequest::from_json(&body).inspect_err(|err| {
        tracing::debug!(error = ?err, "rejected generate request");
    })?;
    tracing::debug!(
        category = match_niche(request.niche()),
        has_trend = request.trend_keyword().is_some(),
        "generating plan"
    );
    Ok(Json(compose_plan(&request)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

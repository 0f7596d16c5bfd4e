//! Axum server exposing the query pipeline.
//!
//! The pipeline itself never fails, so the only error path here is request
//! framing: a body that is not parseable as JSON at all gets a fixed-text
//! 400 response.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Settings;
use crate::query::answer_question_with_limits;
use crate::sanitize::sanitize_with_limits;

/// Fixed client error for unparseable request bodies.
const FRAMING_ERROR: &str = "Impossible de traiter la question. Vérifiez le format du JSON.";

/// Application state shared across handlers.
pub struct AppState {
    pub settings: Settings,
}

/// Build the axum router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/query", post(query))
        .route("/api/sanitize", post(sanitize_document))
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn serve(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let port = settings.server.port;
    let state = Arc::new(AppState { settings });
    let app = router(state);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Univers API");
    println!("   URL: http://localhost:{}", port);
    println!();
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Deserialize)]
struct QueryRequest {
    #[serde(default)]
    question: String,
    /// Absent universe behaves like a non-object document.
    #[serde(default)]
    universe: Value,
}

#[derive(Serialize)]
struct FramingError {
    error: &'static str,
}

fn framing_error() -> (StatusCode, Json<FramingError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(FramingError {
            error: FRAMING_ERROR,
        }),
    )
}

/// POST /api/query - Answer a question about a universe document
async fn query(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    let request: QueryRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(_) => return framing_error().into_response(),
    };

    let outcome =
        answer_question_with_limits(&request.question, &request.universe, &state.settings.limits);
    Json(outcome).into_response()
}

/// POST /api/sanitize - Return the sanitized form of a universe document
async fn sanitize_document(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    let raw: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => return framing_error().into_response(),
    };

    Json(sanitize_with_limits(&raw, &state.settings.limits)).into_response()
}

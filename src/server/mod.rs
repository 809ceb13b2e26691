//! Thin HTTP surface over the pipeline and the documentation helpers.
//!
//! Handlers do no work of their own: `/analyze` runs one pipeline pass and
//! persists the artifact, the rest forward prompts to the injected
//! [`TextGenerator`]. Every failure maps to `{"error": "<message>"}` with a
//! 500, or a 400 when the request itself is malformed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::core::CodebaseAnalyzer;
use crate::llm::prompts::{self, FunctionData, ProjectContext};
use crate::llm::{GeminiClient, GenerationError, TextGenerator};

#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    analyzer: Arc<CodebaseAnalyzer>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Builds server state from config. The text generator is only wired up
    /// when an API key is present; analysis works without one.
    pub fn new(config: AppConfig) -> Self {
        let generator: Option<Arc<dyn TextGenerator>> = config
            .gemini_api_key
            .clone()
            .map(|key| {
                Arc::new(GeminiClient::new(key, config.gemini_model.clone()))
                    as Arc<dyn TextGenerator>
            });

        Self {
            config: Arc::new(config),
            analyzer: Arc::new(CodebaseAnalyzer::new()),
            generator,
        }
    }

    /// Overrides the text generator, mainly for tests.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", get(analyze))
        .route("/gemini", post(gemini))
        .route("/api/gemini", post(api_gemini))
        .route("/api/analyze-function", post(analyze_function))
        .with_state(state)
}

pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

type ApiResponse = (StatusCode, Json<Value>);

fn error_response(status: StatusCode, message: impl Into<String>) -> ApiResponse {
    (status, Json(json!({ "error": message.into() })))
}

/// GET /analyze — run the pipeline, persist the graph, return it.
async fn analyze(State(state): State<AppState>) -> ApiResponse {
    let analyzer = state.analyzer.clone();
    let config = state.config.clone();

    // The pipeline does blocking filesystem work (and fans out with rayon),
    // so keep it off the async workers.
    let run = tokio::task::spawn_blocking(move || analyzer.analyze_and_persist(&config)).await;

    match run {
        Ok(Ok(graph)) => (StatusCode::OK, Json(json!(graph))),
        Ok(Err(err)) => {
            error!("analysis failed: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(err) => {
            error!("analysis task panicked: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct PromptRequest {
    prompt: Option<String>,
}

async fn run_prompt(
    state: &AppState,
    request: PromptRequest,
    response_key: &str,
) -> ApiResponse {
    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing prompt");
    };

    let Some(generator) = state.generator.as_ref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            GenerationError::MissingApiKey.to_string(),
        );
    };

    match generator.generate(&prompt).await {
        Ok(text) => (StatusCode::OK, Json(json!({ response_key: text }))),
        Err(err) => {
            error!("text generation failed: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

/// POST /gemini — `{"prompt": ...}` in, `{"result": ...}` out.
async fn gemini(State(state): State<AppState>, Json(request): Json<PromptRequest>) -> ApiResponse {
    run_prompt(&state, request, "result").await
}

/// POST /api/gemini — same contract, `{"response": ...}` out.
async fn api_gemini(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> ApiResponse {
    run_prompt(&state, request, "response").await
}

/// POST /api/analyze-function — generate structured docs for one function.
async fn analyze_function(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResponse {
    let function: Option<FunctionData> = body
        .get("functionData")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok());

    let Some(function) = function.filter(|f| !f.source_code.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing or invalid function data");
    };

    let context: ProjectContext = body
        .get("projectContext")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default();

    let Some(generator) = state.generator.as_ref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            GenerationError::MissingApiKey.to_string(),
        );
    };

    match prompts::generate_function_docs(generator.as_ref(), &function, &context).await {
        Ok(docs) => (StatusCode::OK, Json(json!(docs))),
        Err(err) => {
            error!("documentation generation failed: {err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

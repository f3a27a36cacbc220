//! Axum route handlers for the Fabric gateway API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::BytesRejection, FromRequest, FromRequestParts, Path, Query, Request, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use fabric_core::{
    shortcuts, ChatRequest, InvocationResult, ListingKind, PatternRequest, ScrapeRequest,
    ToolDescriptor, YouTubeRequest, TOOL_CATALOG,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Map, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{error::GatewayError, service::Gateway};

// ── Shared state ─────────────────────────────────────────────────────────────

type SharedGateway = Arc<Gateway>;

// ── Request / response types ──────────────────────────────────────────────────

/// JSON body extractor whose rejections are reported as 422 `{"detail"}`.
///
/// A body sent without any `Content-Type` is parsed as JSON; any other
/// non-JSON content type is rejected.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        req.headers_mut()
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string extractor whose rejections are reported as 422 `{"detail"}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(GatewayError))]
pub struct ValidatedQuery<T>(pub T);

/// Raw query pairs, kept in order so a repeated key resolves to its last value.
type QueryPairs = Vec<(String, String)>;

/// Body of a shortcut request; only decoded when `?text=` is absent.
type RawBody = Result<Bytes, BytesRejection>;

#[derive(Debug, Serialize)]
pub struct PatternResponse {
    pub pattern: String,
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub url: String,
    pub success: bool,
    pub transcript: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub url: String,
    pub success: bool,
    pub content: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PatternContentResponse {
    pub pattern: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ToolsResponse {
    pub tools: &'static [ToolDescriptor],
}

impl PatternResponse {
    fn new(pattern: String, result: InvocationResult) -> Self {
        Self {
            pattern,
            success: result.success,
            output: result.output,
            error: result.error,
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given gateway.
pub fn create_router(gateway: SharedGateway) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/patterns", get(list_patterns))
        .route("/models", get(list_models))
        .route("/contexts", get(list_contexts))
        .route("/run_pattern", post(run_pattern))
        .route("/summarize", post(summarize))
        .route("/extract_wisdom", post(extract_wisdom))
        .route("/analyze_claims", post(analyze_claims))
        .route("/youtube_transcript", post(youtube_transcript))
        .route("/scrape_url", post(scrape_url))
        .route("/pattern/{pattern_name}", get(get_pattern_content))
        .route("/chat", post(chat))
        .with_state(gateway)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: service banner.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "service": "Fabric MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "healthy"})))
}

/// `GET /tools`: static catalog, never spawns the CLI.
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse { tools: &TOOL_CATALOG })
}

/// `GET /patterns`.
///
/// # Errors
/// Returns [`GatewayError::Listing`] (500) if the CLI fails.
pub async fn list_patterns(State(gw): State<SharedGateway>) -> Result<Json<Value>, GatewayError> {
    listing(&gw, ListingKind::Patterns).await
}

/// `GET /models`.
///
/// # Errors
/// Returns [`GatewayError::Listing`] (500) if the CLI fails.
pub async fn list_models(State(gw): State<SharedGateway>) -> Result<Json<Value>, GatewayError> {
    listing(&gw, ListingKind::Models).await
}

/// `GET /contexts`.
///
/// # Errors
/// Returns [`GatewayError::Listing`] (500) if the CLI fails.
pub async fn list_contexts(State(gw): State<SharedGateway>) -> Result<Json<Value>, GatewayError> {
    listing(&gw, ListingKind::Contexts).await
}

async fn listing(gw: &Gateway, kind: ListingKind) -> Result<Json<Value>, GatewayError> {
    let entries = gw.list(kind).await?;
    let count = entries.len();

    let mut body = Map::new();
    body.insert(kind.key().to_owned(), json!(entries));
    body.insert("count".to_owned(), json!(count));
    Ok(Json(Value::Object(body)))
}

/// `POST /run_pattern`. A failed invocation is still a 200.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) for a malformed body.
pub async fn run_pattern(
    State(gw): State<SharedGateway>,
    ValidatedJson(req): ValidatedJson<PatternRequest>,
) -> Result<Json<PatternResponse>, GatewayError> {
    let result = gw.run_pattern(&req).await;
    Ok(Json(PatternResponse::new(req.pattern, result)))
}

/// `POST /summarize?text=...`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) when no text is supplied.
pub async fn summarize(
    State(gw): State<SharedGateway>,
    ValidatedQuery(params): ValidatedQuery<QueryPairs>,
    body: RawBody,
) -> Result<Json<PatternResponse>, GatewayError> {
    shortcut(&gw, shortcuts::SUMMARIZE, params, body).await
}

/// `POST /extract_wisdom?text=...`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) when no text is supplied.
pub async fn extract_wisdom(
    State(gw): State<SharedGateway>,
    ValidatedQuery(params): ValidatedQuery<QueryPairs>,
    body: RawBody,
) -> Result<Json<PatternResponse>, GatewayError> {
    shortcut(&gw, shortcuts::EXTRACT_WISDOM, params, body).await
}

/// `POST /analyze_claims?text=...`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) when no text is supplied.
pub async fn analyze_claims(
    State(gw): State<SharedGateway>,
    ValidatedQuery(params): ValidatedQuery<QueryPairs>,
    body: RawBody,
) -> Result<Json<PatternResponse>, GatewayError> {
    shortcut(&gw, shortcuts::ANALYZE_CLAIMS, params, body).await
}

/// The last `text` query parameter wins; a non-empty UTF-8 body is the
/// fallback and is ignored entirely when the query carries the text.
async fn shortcut(
    gw: &Gateway,
    pattern: &str,
    params: QueryPairs,
    body: RawBody,
) -> Result<Json<PatternResponse>, GatewayError> {
    let text = match params.into_iter().rev().find(|(key, _)| key == "text") {
        Some((_, text)) => text,
        None => body_text(body)?,
    };

    let req = PatternRequest::new(pattern, text);
    let result = gw.run_pattern(&req).await;
    Ok(Json(PatternResponse::new(req.pattern, result)))
}

fn body_text(body: RawBody) -> Result<String, GatewayError> {
    let bytes = body.map_err(|rejection| GatewayError::InvalidBody(rejection.body_text()))?;
    if bytes.is_empty() {
        return Err(GatewayError::InvalidBody("missing required parameter: text".to_owned()));
    }
    String::from_utf8(bytes.to_vec())
        .map_err(|_| GatewayError::InvalidBody("request body is not valid UTF-8".to_owned()))
}

/// `POST /youtube_transcript`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) for a malformed body.
pub async fn youtube_transcript(
    State(gw): State<SharedGateway>,
    ValidatedJson(req): ValidatedJson<YouTubeRequest>,
) -> Result<Json<TranscriptResponse>, GatewayError> {
    let result = gw.youtube_transcript(&req).await;
    Ok(Json(TranscriptResponse {
        url: req.url,
        success: result.success,
        transcript: result.output,
        error: result.error,
    }))
}

/// `POST /scrape_url`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) for a malformed body.
pub async fn scrape_url(
    State(gw): State<SharedGateway>,
    ValidatedJson(req): ValidatedJson<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, GatewayError> {
    let result = gw.scrape_url(&req).await;
    Ok(Json(ScrapeResponse {
        url: req.url,
        success: result.success,
        content: result.output,
        error: result.error,
    }))
}

/// `GET /pattern/{pattern_name}`: raw `system.md` of a pattern.
///
/// # Errors
/// Returns [`GatewayError::PatternNotFound`] (404) if the file is absent, or
/// [`GatewayError::PatternRead`] (500) if it cannot be read.
pub async fn get_pattern_content(
    State(gw): State<SharedGateway>,
    Path(pattern_name): Path<String>,
) -> Result<Json<PatternContentResponse>, GatewayError> {
    let content = gw.pattern_content(&pattern_name).await?;
    Ok(Json(PatternContentResponse { pattern: pattern_name, content }))
}

/// `POST /chat`.
///
/// # Errors
/// Returns [`GatewayError::InvalidBody`] (422) for a malformed body.
pub async fn chat(
    State(gw): State<SharedGateway>,
    ValidatedJson(req): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, GatewayError> {
    let result = gw.chat(&req).await;
    Ok(Json(ChatResponse {
        success: result.success,
        response: result.output,
        error: result.error,
    }))
}

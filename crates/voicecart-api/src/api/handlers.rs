/// API request handlers
use crate::api::models::{
    CommandRequest, CommandResponse, ErrorResponse, HealthResponse, ItemsRequest, SearchRequest,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use voicecart_core::{Catalog, ContentGenerator, Error, IntentParser, RecipeAdvisor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub parser: IntentParser,
    pub advisor: RecipeAdvisor,
    pub catalog: Arc<Catalog>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(generator: Arc<dyn ContentGenerator>, catalog: Catalog) -> Self {
        Self {
            parser: IntentParser::new(generator.clone()),
            advisor: RecipeAdvisor::new(generator),
            catalog: Arc::new(catalog),
            start_time: Instant::now(),
        }
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Command endpoint - parse a transcript into a structured command
pub async fn parse_command(
    State(state): State<AppState>,
    Json(request): Json<CommandRequest>,
) -> Response {
    match state.parser.parse(&request.transcript).await {
        Ok(command) => Json(CommandResponse::from(command)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Recipe endpoint - propose a recipe from the current list
pub async fn suggest_recipe(
    State(state): State<AppState>,
    Json(request): Json<ItemsRequest>,
) -> Response {
    match state.advisor.suggest_recipe(&request.items).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => error_response(e),
    }
}

/// Suggestions endpoint - companion items for the current list
pub async fn suggest_additions(
    State(state): State<AppState>,
    Json(request): Json<ItemsRequest>,
) -> Response {
    match state.advisor.suggest_additions(&request.items).await {
        Ok(suggestions) => Json(suggestions).into_response(),
        Err(e) => error_response(e),
    }
}

/// Search endpoint - filter the product catalog
pub async fn search_catalog(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let criteria = request.into_criteria();
    let results = state.catalog.search(&criteria);
    Json(results).into_response()
}

/// Map a core error onto an HTTP response
///
/// Generator failures are logged with their cause but surfaced with a generic
/// message only.
fn error_response(error: Error) -> Response {
    match error {
        Error::InvalidInput(message) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("invalid_input", message)),
        )
            .into_response(),
        Error::Generation(cause) => {
            tracing::error!("content generation failed: {cause}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "generation_error",
                    "Failed to get a response from the content generator",
                )),
            )
                .into_response()
        }
    }
}

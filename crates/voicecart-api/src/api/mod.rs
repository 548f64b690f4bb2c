pub mod handlers;
pub mod models;
/// REST API server for the VoiceCart backend
///
/// This module provides:
/// - `POST /api/command` — transcript to structured command
/// - `POST /api/recipe` and `POST /api/suggestions` — generator pass-throughs
/// - `POST /api/search` — catalog filtering
/// - JSON request/response format with CORS for the browser front end
pub mod server;

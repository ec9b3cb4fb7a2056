//! API routes

pub mod chat;
pub mod sessions;
pub mod upload;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use crate::types::response::ServiceInfo;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Service info
        .route("/", get(service_info))
        // Upload - with larger body limit for document files
        .route(
            "/upload",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Chat
        .route("/chat", post(chat::chat))
        // Session management
        .route("/sessions", get(sessions::list_sessions))
        .route(
            "/session/:id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
}

/// GET / - Service info
async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "docchat".to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_sessions: state.sessions().len(),
    })
}

//! Session query and delete endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::DeleteResponse;
use crate::types::SessionSummary;

/// GET /sessions - List all session summaries
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionSummary>> {
    Json(state.sessions().list())
}

/// GET /session/:id - Get a specific session's summary
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>> {
    let session = state
        .sessions()
        .get(&id)
        .ok_or(Error::SessionNotFound(id))?;
    session.touch();

    Ok(Json(SessionSummary::from(&session.meta)))
}

/// DELETE /session/:id - Delete a session and release its resources
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    let meta = state
        .sessions()
        .delete(&id)
        .ok_or(Error::SessionNotFound(id))?;

    Ok(Json(DeleteResponse {
        message: format!("Session {} ('{}') deleted", meta.session_id, meta.filename),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, RetrievalConfig};
    use crate::error::Result;
    use crate::generation::{ChatMessage, ModelProvider};
    use crate::retrieval::SessionIndex;
    use crate::server::state::AppState;
    use crate::types::Chunk;
    use async_trait::async_trait;
    use axum::extract::{Path, State};
    use std::sync::Arc;
    use std::time::Duration;

    struct NullProvider;

    #[async_trait]
    impl ModelProvider for NullProvider {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }

        async fn chat(&self, _messages: &[ChatMessage]) -> Result<String> {
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    fn state_with_one_session() -> (AppState, uuid::Uuid) {
        let state = AppState::with_provider(AppConfig::default(), Arc::new(NullProvider));
        let mut chunk = Chunk::new("a chunk of text".to_string(), None, 0);
        chunk.embedding = vec![1.0, 0.0];
        let index = SessionIndex::build(vec![chunk], &RetrievalConfig::default()).unwrap();
        let meta = state.sessions().create("doc.txt".to_string(), 1, index);
        (state, meta.session_id)
    }

    #[tokio::test]
    async fn lookup_resets_the_idle_clock() {
        let (state, id) = state_with_one_session();

        std::thread::sleep(Duration::from_millis(20));
        let before = state.sessions().get(&id).unwrap().idle_for();
        assert!(before >= Duration::from_millis(20));

        get_session(State(state.clone()), Path(id)).await.unwrap();

        let after = state.sessions().get(&id).unwrap().idle_for();
        assert!(after < before);
    }
}

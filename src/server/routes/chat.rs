//! Chat endpoint with session-scoped retrieval

use axum::{extract::State, Json};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::server::state::AppState;
use crate::types::request::ChatRequest;
use crate::types::response::{ChatResponse, SourceChunk};

/// POST /chat - Ask a question against an existing session.
///
/// The session's conversation lock is held across retrieval and generation,
/// so concurrent chat calls on one session serialize and history appends
/// stay ordered.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let session = state
        .sessions()
        .get(&request.session_id)
        .ok_or(Error::SessionNotFound(request.session_id))?;
    session.touch();

    tracing::info!("Chat on session {}: \"{}\"", request.session_id, request.question);

    let start = Instant::now();
    let mut conversation = session.lock_conversation().await;

    let query_embedding = state.provider().embed(&request.question).await?;
    let results = session
        .index
        .search(&query_embedding, state.config().retrieval.top_k)?;

    let context = PromptBuilder::build_context(&results, &session.meta.filename);
    let messages = PromptBuilder::build_messages(&request.question, &context, conversation.turns());

    let answer = state.provider().chat(&messages).await?;

    conversation.append(request.question.clone(), answer.clone());
    drop(conversation);

    let latency_ms = start.elapsed().as_millis() as u64;

    let sources: Vec<SourceChunk> = results
        .iter()
        .map(|r| SourceChunk::from_result(r, &session.meta.filename))
        .collect();

    tracing::info!(
        "Answered in {}ms with {} source chunk(s)",
        latency_ms,
        sources.len()
    );

    Ok(Json(ChatResponse {
        session_id: request.session_id,
        question: request.question,
        answer,
        sources,
        latency_ms,
    }))
}

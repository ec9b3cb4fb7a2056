//! Document upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::ingestion::{FileParser, TextChunker};
use crate::retrieval::SessionIndex;
use crate::server::state::AppState;
use crate::types::response::UploadResponse;

/// POST /upload - Upload a document and create a session.
///
/// Upload either fully succeeds (one new session) or fully fails: the
/// session is created only after parsing, chunking, embedding, and index
/// construction have all completed.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    // Take the first field carrying a filename
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::internal(format!("failed to read multipart field: {}", e)))?
    {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| Error::internal(format!("failed to read file: {}", e)))?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload
        .ok_or_else(|| Error::InvalidRequest("multipart body contains no file".to_string()))?;

    tracing::info!("Processing upload: {} ({} bytes)", filename, data.len());

    let parsed = FileParser::parse(&filename, &data)?;

    let chunker = TextChunker::from_config(&state.config().chunking);
    let mut chunks = chunker.chunk_document(&parsed);
    if chunks.is_empty() {
        return Err(Error::extraction(&filename, "document produced no chunks"));
    }

    for chunk in chunks.iter_mut() {
        chunk.embedding = state.provider().embed(&chunk.content).await?;
    }

    let index = SessionIndex::build(chunks, &state.config().retrieval)?;
    let meta = state
        .sessions()
        .create(filename, parsed.page_count(), index);

    tracing::info!(
        "Ingested '{}': {} pages, {} chunks",
        meta.filename,
        meta.pages,
        meta.chunks_count
    );

    Ok(Json(UploadResponse {
        session_id: meta.session_id,
        filename: meta.filename.clone(),
        pages: meta.pages,
        chunks: meta.chunks_count,
        message: format!(
            "Document '{}' indexed; session is ready for questions",
            meta.filename
        ),
    }))
}

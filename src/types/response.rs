//! Response types for the HTTP surface

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::retrieval::SearchResult;

/// Response after a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Newly created session
    pub session_id: Uuid,
    /// Original uploaded file name
    pub filename: String,
    /// Pages extracted from the document
    pub pages: u32,
    /// Chunks created and indexed
    pub chunks: u32,
    /// Human-readable confirmation
    pub message: String,
}

/// A retrieved chunk returned for attribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceChunk {
    /// Chunk text
    pub content: String,
    /// Page number the chunk came from (PDFs only)
    pub page: Option<u32>,
    /// Originating file name
    pub source: String,
    /// Similarity score (0.0-1.0, higher is better)
    pub score: f32,
}

impl SourceChunk {
    /// Build an attribution entry from a search result
    pub fn from_result(result: &SearchResult, filename: &str) -> Self {
        Self {
            content: result.chunk.content.clone(),
            page: result.chunk.page_number,
            source: filename.to_string(),
            score: result.similarity,
        }
    }
}

/// Response to a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Session the question was asked against
    pub session_id: Uuid,
    /// The question as received
    pub question: String,
    /// Generated answer
    pub answer: String,
    /// Retrieved chunks used for attribution
    pub sources: Vec<SourceChunk>,
    /// Wall-clock latency of retrieval plus generation
    pub latency_ms: u64,
}

/// Response to a session deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Service info returned at the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub service: String,
    /// Always "ok" while serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of live sessions
    pub active_sessions: usize,
}

//! Session metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable metadata recorded when a session is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    /// Opaque unique identifier, generated at upload time, never reused
    pub session_id: Uuid,
    /// Original uploaded file name
    pub filename: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Number of chunks produced by the chunker
    pub chunks_count: u32,
    /// Number of pages extracted from the document
    pub pages: u32,
}

impl SessionMeta {
    /// Create metadata for a fresh session
    pub fn new(filename: String, chunks_count: u32, pages: u32) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            filename,
            created_at: Utc::now(),
            chunks_count,
            pages,
        }
    }
}

/// Session summary returned by the list and get endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Original uploaded file name
    pub filename: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Number of chunks stored for this session
    pub chunks_count: u32,
}

impl From<&SessionMeta> for SessionSummary {
    fn from(meta: &SessionMeta) -> Self {
        Self {
            session_id: meta.session_id,
            filename: meta.filename.clone(),
            created_at: meta.created_at,
            chunks_count: meta.chunks_count,
        }
    }
}

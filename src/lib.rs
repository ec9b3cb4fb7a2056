//! docchat: document Q&A over uploaded files with session-scoped retrieval
//!
//! A user uploads a PDF or plain-text file, the service extracts and chunks
//! its text, embeds the chunks through a hosted model API, and binds the
//! resulting vector index to a session. Questions against that session are
//! answered by retrieving the most relevant chunks and conditioning a
//! chat-completion call on them plus the session's prior turns.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod retrieval;
pub mod server;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    request::ChatRequest,
    response::{ChatResponse, SourceChunk, UploadResponse},
    session::{SessionMeta, SessionSummary},
};

//! Shared domain types

pub mod document;
pub mod request;
pub mod response;
pub mod session;

pub use document::{Chunk, FileType};
pub use session::{SessionMeta, SessionSummary};

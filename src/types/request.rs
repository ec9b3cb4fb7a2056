//! Request types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chat request against an existing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Session to answer against
    pub session_id: Uuid,
    /// Natural-language question
    pub question: String,
}

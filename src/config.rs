//! Configuration for the document chat service

use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Chunking configuration
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    pub retrieval: RetrievalConfig,
    /// Hosted model API configuration
    pub model: ModelConfig,
    /// Session lifecycle configuration
    pub sessions: SessionConfig,
}

impl AppConfig {
    /// Load configuration from defaults, applying environment overrides.
    ///
    /// The API credential is supplied out-of-band through `DOCCHAT_API_KEY`
    /// and is never a request parameter.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("DOCCHAT_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("DOCCHAT_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        if let Ok(key) = std::env::var("DOCCHAT_API_KEY") {
            config.model.api_key = key;
        }
        if let Ok(url) = std::env::var("DOCCHAT_API_BASE_URL") {
            config.model.base_url = url;
        }
        if let Ok(model) = std::env::var("DOCCHAT_CHAT_MODEL") {
            config.model.chat_model = model;
        }
        if let Ok(model) = std::env::var("DOCCHAT_EMBED_MODEL") {
            config.model.embed_model = model;
        }
        if let Ok(ttl) = std::env::var("DOCCHAT_SESSION_TTL_SECS") {
            if let Ok(ttl) = ttl.parse() {
                config.sessions.idle_ttl_secs = ttl;
            }
        }

        config
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_upload_size: 50 * 1024 * 1024,
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between chunks in characters
    pub chunk_overlap: usize,
    /// Minimum chunk size (skip smaller chunks)
    pub min_chunk_size: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            min_chunk_size: 50,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per question
    pub top_k: usize,
    /// HNSW M parameter (connections per layer)
    pub hnsw_m: usize,
    /// HNSW ef_construction parameter
    pub hnsw_ef_construction: usize,
    /// HNSW ef_search parameter
    pub hnsw_ef_search: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            hnsw_m: 16,
            hnsw_ef_construction: 200,
            hnsw_ef_search: 100,
        }
    }
}

/// Hosted model API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API base URL (chat-completions compatible)
    pub base_url: String,
    /// API credential, supplied via environment
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Chat model name
    pub chat_model: String,
    /// Embedding model name
    pub embed_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds for outbound calls
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            chat_model: "gpt-4o-mini".to_string(),
            embed_model: "text-embedding-3-small".to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

/// Session lifecycle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Evict sessions idle longer than this (0 disables eviction)
    pub idle_ttl_secs: u64,
    /// Interval between eviction sweeps
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 3600,
            sweep_interval_secs: 60,
        }
    }
}

//! Per-session vector index over document chunks
//!
//! Each session owns one immutable index built at upload time from the
//! embedded chunks of a single document. Uses HNSW with cosine distance;
//! deleting a session drops the whole index.

use hnsw_rs::prelude::*;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::types::Chunk;

/// Search result with chunk and similarity
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Similarity score (0.0-1.0, higher is better)
    pub similarity: f32,
}

/// Immutable nearest-neighbor index over one session's chunks
pub struct SessionIndex {
    hnsw: Hnsw<'static, f32, DistCosine>,
    chunks: Vec<Chunk>,
    dimensions: usize,
    ef_search: usize,
}

impl SessionIndex {
    /// Build an index from embedded chunks.
    ///
    /// Every chunk must carry an embedding of the same dimensionality with
    /// finite components; the dimensionality is taken from the first chunk.
    pub fn build(chunks: Vec<Chunk>, config: &RetrievalConfig) -> Result<Self> {
        let dimensions = chunks
            .first()
            .map(|c| c.embedding.len())
            .ok_or_else(|| Error::Index("cannot build an index over zero chunks".into()))?;

        if dimensions == 0 {
            return Err(Error::Index("first chunk has an empty embedding".into()));
        }

        for (i, chunk) in chunks.iter().enumerate() {
            if chunk.embedding.len() != dimensions {
                return Err(Error::Index(format!(
                    "chunk {} has {} dimensions, expected {}",
                    i,
                    chunk.embedding.len(),
                    dimensions
                )));
            }
            if chunk.embedding.iter().any(|v| !v.is_finite()) {
                return Err(Error::Index(format!("chunk {} embedding is not finite", i)));
            }
        }

        let mut hnsw: Hnsw<'static, f32, DistCosine> = Hnsw::new(
            config.hnsw_m,
            chunks.len(),
            16,
            config.hnsw_ef_construction,
            DistCosine,
        );

        for (id, chunk) in chunks.iter().enumerate() {
            let normalized = normalize(&chunk.embedding);
            hnsw.insert((&normalized, id));
        }
        hnsw.set_searching_mode(true);

        Ok(Self {
            hnsw,
            chunks,
            dimensions,
            ef_search: config.hnsw_ef_search,
        })
    }

    /// Search for the `top_k` chunks nearest to the query embedding
    pub fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        if query.len() != self.dimensions {
            return Err(Error::Index(format!(
                "query has {} dimensions, index has {}",
                query.len(),
                self.dimensions
            )));
        }

        let normalized = normalize(query);
        let neighbours = self.hnsw.search(&normalized, top_k, self.ef_search);

        let mut results: Vec<SearchResult> = neighbours
            .into_iter()
            .filter_map(|n| {
                self.chunks.get(n.d_id).map(|chunk| SearchResult {
                    chunk: chunk.clone(),
                    // DistCosine returns 1 - cos(a, b)
                    similarity: (1.0 - n.distance).clamp(0.0, 1.0),
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(top_k);

        Ok(results)
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Normalize a vector to unit length for cosine search
fn normalize(vector: &[f32]) -> Vec<f32> {
    let magnitude = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        vector.iter().map(|v| v / magnitude).collect()
    } else {
        vector.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_with_embedding(content: &str, index: u32, embedding: Vec<f32>) -> Chunk {
        let mut chunk = Chunk::new(content.to_string(), None, index);
        chunk.embedding = embedding;
        chunk
    }

    #[test]
    fn nearest_chunk_wins() {
        let chunks = vec![
            chunk_with_embedding("about cats", 0, vec![1.0, 0.0, 0.0]),
            chunk_with_embedding("about dogs", 1, vec![0.0, 1.0, 0.0]),
            chunk_with_embedding("about fish", 2, vec![0.0, 0.0, 1.0]),
        ];
        let index = SessionIndex::build(chunks, &RetrievalConfig::default()).unwrap();

        let results = index.search(&[0.9, 0.1, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.content, "about cats");
        assert!(results[0].similarity > results[1].similarity);
    }

    #[test]
    fn empty_chunk_set_is_rejected() {
        assert!(matches!(
            SessionIndex::build(Vec::new(), &RetrievalConfig::default()),
            Err(Error::Index(_))
        ));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let chunks = vec![
            chunk_with_embedding("a", 0, vec![1.0, 0.0]),
            chunk_with_embedding("b", 1, vec![1.0, 0.0, 0.0]),
        ];
        assert!(matches!(
            SessionIndex::build(chunks, &RetrievalConfig::default()),
            Err(Error::Index(_))
        ));
    }

    #[test]
    fn query_dimension_mismatch_is_rejected() {
        let chunks = vec![chunk_with_embedding("a", 0, vec![1.0, 0.0, 0.0])];
        let index = SessionIndex::build(chunks, &RetrievalConfig::default()).unwrap();
        let err = index.search(&[1.0, 0.0], 1).unwrap_err();
        assert!(matches!(err, Error::Index(_)));
    }

    #[test]
    fn top_k_caps_result_count() {
        let chunks: Vec<Chunk> = (0..10)
            .map(|i| {
                let mut embedding = vec![0.0; 4];
                embedding[i % 4] = 1.0;
                embedding[(i + 1) % 4] = 0.5;
                chunk_with_embedding(&format!("chunk {}", i), i as u32, embedding)
            })
            .collect();
        let index = SessionIndex::build(chunks, &RetrievalConfig::default()).unwrap();

        let results = index.search(&[1.0, 0.5, 0.0, 0.0], 3).unwrap();
        assert_eq!(results.len(), 3);
    }
}

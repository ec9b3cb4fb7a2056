//! Text chunking with page tracking

use unicode_segmentation::UnicodeSegmentation;

use super::parser::ParsedDocument;
use crate::config::ChunkingConfig;
use crate::types::{Chunk, FileType};

/// Sentence-aware chunker with configurable size and overlap
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
    /// Overlap between chunks
    overlap: usize,
    /// Minimum chunk size
    min_size: usize,
}

impl TextChunker {
    /// Create a new chunker
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            min_size: 50,
        }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self {
            chunk_size: config.chunk_size,
            overlap: config.chunk_overlap,
            min_size: config.min_chunk_size,
        }
    }

    /// Chunk a parsed document, preserving page attribution
    pub fn chunk_document(&self, parsed: &ParsedDocument) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for page in &parsed.pages {
            let page_number = match parsed.file_type {
                FileType::Pdf => Some(page.page_number),
                _ => None,
            };

            let page_chunks =
                self.chunk_text(&page.content, page_number, chunks.len() as u32);
            chunks.extend(page_chunks);
        }

        // A valid document shorter than min_size still gets one chunk; the
        // minimum only filters fragments out of longer documents.
        if chunks.is_empty() {
            let text = parsed
                .pages
                .iter()
                .map(|p| p.content.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            if !text.is_empty() {
                let page_number = match parsed.file_type {
                    FileType::Pdf => parsed
                        .pages
                        .iter()
                        .find(|p| !p.content.trim().is_empty())
                        .map(|p| p.page_number),
                    _ => None,
                };
                chunks.push(Chunk::new(text, page_number, 0));
            }
        }

        chunks
    }

    /// Chunk a single run of text
    fn chunk_text(
        &self,
        text: &str,
        page_number: Option<u32>,
        start_index: u32,
    ) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut chunk_index = start_index;

        for sentence in text.split_sentence_bounds() {
            // If adding this sentence exceeds chunk size, save current chunk
            if !current.is_empty() && current.len() + sentence.len() > self.chunk_size {
                if current.trim().len() >= self.min_size {
                    chunks.push(Chunk::new(
                        current.trim().to_string(),
                        page_number,
                        chunk_index,
                    ));
                    chunk_index += 1;
                }

                current = self.overlap_text(&current);
            }

            current.push_str(sentence);
        }

        if current.trim().len() >= self.min_size {
            chunks.push(Chunk::new(
                current.trim().to_string(),
                page_number,
                chunk_index,
            ));
        }

        chunks
    }

    /// Tail of the previous chunk carried into the next one
    fn overlap_text(&self, text: &str) -> String {
        if text.len() <= self.overlap {
            return text.to_string();
        }

        let mut start = text.len().saturating_sub(self.overlap);
        while start > 0 && !text.is_char_boundary(start) {
            start -= 1;
        }

        let tail = &text[start..];

        // Prefer a sentence boundary, then a word boundary
        if let Some(pos) = tail.find(". ") {
            return tail[pos + 2..].to_string();
        }
        if let Some(pos) = tail.find(' ') {
            return tail[pos + 1..].to_string();
        }

        tail.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::parser::PageContent;

    fn doc_with_pages(pages: Vec<(u32, String)>, file_type: FileType) -> ParsedDocument {
        ParsedDocument {
            file_type,
            pages: pages
                .into_iter()
                .map(|(page_number, content)| PageContent {
                    page_number,
                    content,
                })
                .collect(),
        }
    }

    #[test]
    fn short_text_yields_single_chunk() {
        let chunker = TextChunker::new(1000, 200);
        let doc = doc_with_pages(
            vec![(1, "A single sentence long enough to clear the minimum size check.".into())],
            FileType::Txt,
        );

        let chunks = chunker.chunk_document(&doc);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_index, 0);
        assert_eq!(chunks[0].page_number, None);
    }

    #[test]
    fn long_text_splits_with_overlap() {
        let chunker = TextChunker::new(200, 50);
        let sentence = "This sentence repeats to build a long enough document. ";
        let text = sentence.repeat(30);
        let doc = doc_with_pages(vec![(1, text)], FileType::Txt);

        let chunks = chunker.chunk_document(&doc);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.content.len() <= 200 + sentence.len());
        }
        // Indexes are sequential
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i as u32);
        }
    }

    #[test]
    fn pdf_pages_keep_page_numbers() {
        let chunker = TextChunker::new(1000, 200);
        let page = "Enough text on this page to survive the minimum chunk size filter easily.";
        let doc = doc_with_pages(
            vec![(1, page.into()), (2, page.into())],
            FileType::Pdf,
        );

        let chunks = chunker.chunk_document(&doc);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].page_number, Some(1));
        assert_eq!(chunks[1].page_number, Some(2));
        assert_eq!(chunks[1].chunk_index, 1);
    }

    #[test]
    fn short_document_yields_one_whole_text_chunk() {
        let chunker = TextChunker::from_config(&ChunkingConfig::default());
        let doc = doc_with_pages(vec![(1, "The mill opened in 1843.".into())], FileType::Txt);

        let chunks = chunker.chunk_document(&doc);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "The mill opened in 1843.");
        assert_eq!(chunks[0].chunk_index, 0);
    }

    #[test]
    fn short_pdf_keeps_its_page_number() {
        let chunker = TextChunker::from_config(&ChunkingConfig::default());
        let doc = doc_with_pages(
            vec![(1, "  ".into()), (2, "One short line.".into())],
            FileType::Pdf,
        );

        let chunks = chunker.chunk_document(&doc);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].page_number, Some(2));
    }

    #[test]
    fn whitespace_only_document_yields_nothing() {
        let chunker = TextChunker::from_config(&ChunkingConfig::default());
        let doc = doc_with_pages(vec![(1, "   \n  ".into())], FileType::Txt);
        assert!(chunker.chunk_document(&doc).is_empty());
    }
}

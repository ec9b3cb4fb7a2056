//! File parser for the supported upload formats (PDF, plain text)

use crate::error::{Error, Result};
use crate::types::FileType;

/// Parsed document with extracted text split into ordered page units
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// File type
    pub file_type: FileType,
    /// Ordered page-level content
    pub pages: Vec<PageContent>,
}

impl ParsedDocument {
    /// Number of pages extracted
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }
}

/// Content from a single page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Text content of the page
    pub content: String,
}

/// Parser dispatching on file extension
pub struct FileParser;

impl FileParser {
    /// Parse a file based on its extension
    pub fn parse(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
        let file_type = FileType::from_extension(&extension);

        if !file_type.is_supported() {
            return Err(Error::UnsupportedType(extension));
        }

        let parsed = match file_type {
            FileType::Pdf => Self::parse_pdf(filename, data)?,
            FileType::Txt => Self::parse_text(data),
            FileType::Unknown => unreachable!("rejected above"),
        };

        if parsed.pages.iter().all(|p| p.content.trim().is_empty()) {
            return Err(Error::extraction(filename, "no extractable text"));
        }

        Ok(parsed)
    }

    /// Parse a PDF, extracting text page by page
    fn parse_pdf(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, e.to_string()))?;

        let mut pages = Vec::new();
        for (page_number, _) in doc.get_pages() {
            let content = doc.extract_text(&[page_number]).unwrap_or_default();
            pages.push(PageContent {
                page_number,
                content,
            });
        }

        // Some PDFs defeat lopdf's text extraction (unusual encodings,
        // compressed object streams). Fall back to pdf-extract over the
        // whole document, losing per-page attribution.
        if pages.iter().all(|p| p.content.trim().is_empty()) {
            let content = pdf_extract::extract_text_from_mem(data)
                .map_err(|e| Error::extraction(filename, e.to_string()))?;
            pages = vec![PageContent {
                page_number: 1,
                content,
            }];
        }

        Ok(ParsedDocument {
            file_type: FileType::Pdf,
            pages,
        })
    }

    /// Parse plain text as a single page
    fn parse_text(data: &[u8]) -> ParsedDocument {
        let content = String::from_utf8_lossy(data).to_string();

        ParsedDocument {
            file_type: FileType::Txt,
            pages: vec![PageContent {
                page_number: 1,
                content,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_text() {
        let parsed = FileParser::parse("notes.txt", b"The quick brown fox.").unwrap();
        assert_eq!(parsed.file_type, FileType::Txt);
        assert_eq!(parsed.page_count(), 1);
        assert_eq!(parsed.pages[0].content, "The quick brown fox.");
    }

    #[test]
    fn rejects_unsupported_extension() {
        let err = FileParser::parse("report.docx", b"PK\x03\x04").unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref ext) if ext == "docx"));
    }

    #[test]
    fn rejects_extensionless_file() {
        let err = FileParser::parse("README", b"hello").unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn empty_text_is_an_extraction_error() {
        let err = FileParser::parse("blank.txt", b"   \n  ").unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }

    #[test]
    fn corrupt_pdf_is_an_extraction_error() {
        let err = FileParser::parse("broken.pdf", b"not a pdf at all").unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }
}

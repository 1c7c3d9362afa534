//! Document text extraction for the supported report formats.

use std::path::Path;

use bioguide_core::{Error, Result};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Markdown,
    Pdf,
    Unknown,
}

impl FileType {
    /// Detect file type from extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Self::PlainText,
            "md" | "mdx" | "markdown" => Self::Markdown,
            "pdf" => Self::Pdf,
            _ => Self::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }
}

/// Read a document from disk along with its detected type.
pub fn read_document(path: &Path) -> Result<(Vec<u8>, FileType)> {
    let bytes = std::fs::read(path)?;
    Ok((bytes, FileType::from_path(path)))
}

/// Extract text content from a document payload.
pub fn extract_text(bytes: &[u8], file_type: FileType) -> Result<String> {
    match file_type {
        FileType::PlainText | FileType::Markdown => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
        FileType::Pdf => extract_pdf(bytes),
        FileType::Unknown => {
            if bytes.starts_with(b"%PDF") {
                return extract_pdf(bytes);
            }
            let content = String::from_utf8_lossy(bytes);
            // Too many control characters means a binary payload.
            let control = content
                .chars()
                .filter(|c| c.is_control() && *c != '\n' && *c != '\r' && *c != '\t')
                .count();
            if control > content.len() / 10 {
                Err(Error::Ingest("unsupported binary document".into()))
            } else {
                Ok(content.into_owned())
            }
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    // pdf-extract can panic on malformed input.
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| Error::Ingest("PDF parser aborted on malformed input".into()))?
        .map_err(|e| Error::Ingest(format!("PDF extraction failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("md"), FileType::Markdown);
        assert_eq!(FileType::from_extension("txt"), FileType::PlainText);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("report")), FileType::Unknown);
    }

    #[test]
    fn test_plain_text_is_decoded_lossily() {
        let text = extract_text(b"Market \xff Overview", FileType::PlainText).unwrap();
        assert!(text.starts_with("Market "));
        assert!(text.ends_with(" Overview"));
    }

    #[test]
    fn test_unknown_binary_rejected() {
        let bytes: Vec<u8> = (0u8..32).cycle().take(256).collect();
        assert!(matches!(
            extract_text(&bytes, FileType::Unknown),
            Err(Error::Ingest(_))
        ));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        assert!(extract_text(b"not a pdf", FileType::Pdf).is_err());
    }

    #[test]
    fn test_read_document_missing_file() {
        let err = read_document(Path::new("/nonexistent/report.pdf")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

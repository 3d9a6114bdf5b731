//! Text extraction from résumé documents. The binary format itself is handled
//! by `pdf-extract`; this module only picks the extractor and reads the file.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::ExtractError;

/// Turns a document's bytes into one plain-text blob.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError>;
}

pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

/// UTF-8 text passthrough, for résumés already exported as `.txt`.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract_text(&self, data: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8(data.to_vec())?)
    }
}

/// Chooses an extractor from the file extension.
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>, ExtractError> {
    let extension = path
        .extension()
        .and_then(|v| v.to_str())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => Ok(Box::new(PdfTextExtractor)),
        "txt" => Ok(Box::new(PlainTextExtractor)),
        _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Reads `path` and returns its extracted text.
pub async fn load_resume_text(path: &Path) -> Result<String, ExtractError> {
    let extractor = extractor_for(path)?;
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    extractor.extract_text(&data).await
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_extractor_for_rejects_unknown_extensions() {
        assert!(extractor_for(Path::new("resume.PDF")).is_ok());
        assert!(extractor_for(Path::new("resume.txt")).is_ok());
        assert!(matches!(
            extractor_for(Path::new("resume.docx")),
            Err(ExtractError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            extractor_for(Path::new("resume")),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_load_plain_text_resume() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Jane Doe\nSUMMARY\nBuilds things.").unwrap();

        let text = load_resume_text(file.path()).await.unwrap();
        assert!(text.starts_with("Jane Doe"));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resume_text(&dir.path().join("missing.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_rejected() {
        let err = PlainTextExtractor
            .extract_text(&[0xff, 0xfe, 0x00])
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Utf8(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_a_pdf_error() {
        let err = PdfTextExtractor
            .extract_text(b"not a pdf at all")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}

use std::path::Path;

use crate::domain::DomainError;

/// Raw source text submitted for type extraction.
///
/// The text is carried byte-for-byte; nothing is parsed or validated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    source: String,
}

impl ExtractionRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a source file as UTF-8 text.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::read(path.display().to_string(), e))?;
        Ok(Self { source })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

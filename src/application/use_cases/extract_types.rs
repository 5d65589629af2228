use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error};

use crate::application::ChatClient;
use crate::domain::{DomainError, ExtractionRequest, PromptPayload};

/// Turns Rust source text into its type definitions by asking a chat model.
///
/// Remote failures of any kind are logged and collapsed into
/// [`DomainError::ExtractionFailed`]; the underlying cause stays reachable
/// through `source()` for callers that want to show it.
pub struct ExtractTypesUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl ExtractTypesUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, request: &ExtractionRequest) -> Result<String, DomainError> {
        let payload = PromptPayload::for_source(request);
        debug!("Submitting {} bytes of source for extraction", request.source().len());

        self.chat_client
            .complete(payload.system(), payload.user())
            .await
            .map_err(|e| {
                error!("Error extracting types from source code: {e}");
                DomainError::extraction_failed(e)
            })
    }

    /// Read `path` and extract from its contents. A read failure returns
    /// before any request is made.
    pub async fn execute_file(&self, path: impl AsRef<Path>) -> Result<String, DomainError> {
        let request = ExtractionRequest::from_path(path).await?;
        self.execute(&request).await
    }
}

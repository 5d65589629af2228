use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Failed to read {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API returned status {status}")]
    ApiStatus { status: u16, body: String },

    #[error("No response received from API: {0}")]
    Network(String),

    #[error("Error in setting up request: {0}")]
    RequestSetup(String),

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Failed to extract types from source code")]
    ExtractionFailed(#[source] Box<DomainError>),
}

impl DomainError {
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn request_setup(msg: impl Into<String>) -> Self {
        Self::RequestSetup(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn extraction_failed(cause: DomainError) -> Self {
        Self::ExtractionFailed(Box::new(cause))
    }
}

pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ExtractTypesUseCase};

pub use connector::OpenAiChatClient;

pub use domain::{ChatConfig, DomainError, ExtractionRequest, PromptPayload, SYSTEM_PROMPT};

mod chat_config;
mod extraction_request;
mod prompt;

pub use chat_config::*;
pub use extraction_request::*;
pub use prompt::*;

//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion over HTTP (OpenAI-compatible API)

pub mod adapter;

pub use adapter::*;

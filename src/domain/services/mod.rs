//! Domain services containing core business logic interfaces.

mod error;

pub use error::*;

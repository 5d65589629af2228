mod extract_types;

pub use extract_types::*;

//! Word sources: the remote word-generator API and the local fallback list.

pub mod error;
pub mod fallback;
pub mod http;
pub mod source;

pub use error::WordSourceError;
pub use fallback::FallbackWords;
pub use http::HttpWordSource;
pub use source::{classify_response, parse_words, WordSource};

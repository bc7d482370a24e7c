use async_trait::async_trait;

use super::error::WordSourceError;

/// Anything that can hand out a single random word.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn fetch_word(&self) -> Result<String, WordSourceError>;
}

/// Parse a response body of the form `["word", ...]` and return the first word.
///
/// An empty array counts as a failure, same as a transport error.
pub fn parse_words(body: &[u8]) -> Result<String, WordSourceError> {
    let words: Vec<String> =
        serde_json::from_slice(body).map_err(|e| WordSourceError::Malformed(e.to_string()))?;

    words
        .into_iter()
        .next()
        .ok_or(WordSourceError::Empty)
}

/// Turn an HTTP status and body into a word or a failure.
pub fn classify_response(status: u16, body: &[u8]) -> Result<String, WordSourceError> {
    if !(200..300).contains(&status) {
        return Err(WordSourceError::Status(status));
    }
    parse_words(body)
}

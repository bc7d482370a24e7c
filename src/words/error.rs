use thiserror::Error;

/// Why a fetch from the word source did not produce a word.
///
/// The view collapses all of these into one user-facing message; the
/// variants only exist so the log can say what actually went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("word source responded with HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("word source returned no words")]
    Empty,
}

impl From<reqwest::Error> for WordSourceError {
    fn from(err: reqwest::Error) -> Self {
        WordSourceError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_includes_code() {
        let err = WordSourceError::Status(503);
        assert_eq!(err.to_string(), "word source responded with HTTP 503");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            WordSourceError::Empty.to_string(),
            "word source returned no words"
        );
    }
}

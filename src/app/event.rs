use super::state::AttemptId;
use crate::words::WordSourceError;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// User asked for a new word.
    Refresh,
    FetchFinished {
        attempt: AttemptId,
        outcome: Result<String, WordSourceError>,
    },
    /// The transition delay for an attempt has run out.
    AnimationElapsed(AttemptId),
    GiftHover(bool),
    Quit,
    None,
}

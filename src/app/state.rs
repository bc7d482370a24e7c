use rand::Rng;

use crate::words::{FallbackWords, WordSourceError};

/// Message shown whenever the latest fetch fell back to the local list.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch word. Please try again.";

/// Identifies one fetch attempt; increases with every attempt started.
pub type AttemptId = u64;

/// Everything the word generator view knows about.
///
/// All mutation goes through the transition methods below so the flags
/// always move together in the documented order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordState {
    word: String,
    error: String,
    in_flight: usize,
    animating: bool,
    gift_open: bool,
    latest_attempt: AttemptId,
}

impl WordState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_gift_open(&self) -> bool {
        self.gift_open
    }

    pub fn latest_attempt(&self) -> AttemptId {
        self.latest_attempt
    }

    /// Start an attempt unconditionally. Used for the fetch issued on mount.
    pub fn begin_attempt(&mut self) -> AttemptId {
        self.latest_attempt += 1;
        self.in_flight += 1;
        self.error.clear();
        self.animating = true;
        self.latest_attempt
    }

    /// Start an attempt on behalf of the user. Inert while loading.
    pub fn request_refresh(&mut self) -> Option<AttemptId> {
        if self.is_loading() {
            return None;
        }
        Some(self.begin_attempt())
    }

    /// Apply the outcome of a finished attempt.
    ///
    /// The most recent completion wins: it overwrites the word and the error
    /// regardless of which attempt it belongs to. Returns the word now shown.
    pub fn complete_attempt<R: Rng + ?Sized>(
        &mut self,
        outcome: Result<String, WordSourceError>,
        fallback: &FallbackWords,
        rng: &mut R,
    ) -> &str {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(word) if !word.is_empty() => {
                self.word = word;
                self.error.clear();
            }
            _ => {
                self.error = FETCH_FAILED_MESSAGE.to_string();
                self.word = fallback.choose(rng).to_string();
            }
        }

        &self.word
    }

    /// End the transition animation. Timers from superseded attempts are ignored.
    pub fn finish_animation(&mut self, attempt: AttemptId) -> bool {
        if attempt != self.latest_attempt {
            return false;
        }
        self.animating = false;
        true
    }

    /// Pointer entered (`true`) or left (`false`) the gift. Returns whether it changed.
    pub fn set_gift_open(&mut self, open: bool) -> bool {
        let changed = self.gift_open != open;
        self.gift_open = open;
        changed
    }
}

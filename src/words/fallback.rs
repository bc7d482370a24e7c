use rand::Rng;

/// Words shown when the remote source is unavailable.
pub const DEFAULT_FALLBACK_WORDS: [&str; 6] = [
    "practical",
    "ridiculous",
    "thoughtful",
    "mysterious",
    "cozy",
    "bizarre",
];

/// Immutable, never-empty list of known-good words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackWords {
    words: Vec<String>,
}

impl FallbackWords {
    /// Build a list from arbitrary words. Blank entries are dropped;
    /// returns `None` when nothing usable is left.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Pick one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.words.len());
        &self.words[index]
    }
}

impl Default for FallbackWords {
    fn default() -> Self {
        Self {
            words: DEFAULT_FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

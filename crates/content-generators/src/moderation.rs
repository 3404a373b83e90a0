//! Input screening ahead of generation.
//!
//! The generators never consult a filter themselves; front ends run one over
//! the raw input before calling into the dispatcher.

/// Screens text for terms that should block generation.
pub trait ContentFilter {
    /// Returns the first flagged term found in `text`, if any.
    fn flagged_term(&self, text: &str) -> Option<&str>;
}

/// Starter list used by [`BannedWords::default`].
pub const DEFAULT_BANNED_WORDS: [&str; 5] = ["slur", "hate", "harass", "abuse", "dox"];

/// Case-insensitive substring filter over a fixed word list.
///
/// # Example
///
/// ```
/// use content_generators::{BannedWords, ContentFilter};
///
/// let filter = BannedWords::default();
/// assert_eq!(filter.flagged_term("Stop the HATE threads"), Some("hate"));
/// assert_eq!(filter.flagged_term("ship the thin slice"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedWords {
    words: Vec<String>,
}

impl BannedWords {
    /// Builds a filter from a custom word list. Blank entries are ignored.
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalised = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words: normalised }
    }

    /// The lower-cased words this filter matches.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for BannedWords {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS)
    }
}

impl ContentFilter for BannedWords {
    fn flagged_term(&self, text: &str) -> Option<&str> {
        let haystack = text.to_lowercase();
        self.words
            .iter()
            .find(|word| haystack.contains(word.as_str()))
            .map(String::as_str)
    }
}

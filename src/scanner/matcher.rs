//! Keyword predicate over page text

use crate::config::DEFAULT_KEYWORDS;

/// The keyword set a page must satisfy to count as relevant
///
/// Matching is case-insensitive substring containment, not word-boundary
/// matching: a page containing "Equineology" matches the keyword "equine".
/// Keywords are lowercased once at construction.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Builds a keyword set, lowercasing every entry
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the text contains any keyword
    pub fn matches(&self, text: &str) -> bool {
        let haystack = text.to_lowercase();
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }

    /// The lowercased keywords in this set
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

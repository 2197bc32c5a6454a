use std::fmt::Debug;

use indexmap::IndexMap;

use crate::vectorizer::analyzer::tokenize;

///  TokenFrequency
/// Counts how often each token appears in one document.
/// Token order is the order of first appearance.
///
/// # Examples
/// ```
/// use review_recommender::TokenFrequency;
/// let mut token_freq = TokenFrequency::new();
/// token_freq.add_token("kopi");
/// token_freq.add_token("pahit");
/// token_freq.add_token("kopi");
///
/// assert_eq!(token_freq.token_count("kopi"), 2);
/// assert_eq!(token_freq.token_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFrequency {
    token_count: IndexMap<Box<str>, u32>,
    total_token_count: u64,
}

/// Adding tokens
impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    /// Tokenize `text` and count the result
    pub fn from_text(text: &str) -> Self {
        let mut freq = Self::new();
        freq.add_tokens(&tokenize(text));
        freq
    }

    /// Add one occurrence of a token
    ///
    /// # Arguments
    /// * `token` - token to add
    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(Box::from(token), 1);
        }
        self.total_token_count += 1;
        self
    }

    /// Add every token of a slice
    ///
    /// # Arguments
    /// * `tokens` - tokens to add
    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }
}

/// Reading counts
impl TokenFrequency {
    /// Occurrences of `token`, 0 if it never appeared
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    /// Total number of token occurrences
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of distinct tokens
    #[inline]
    pub fn token_num(&self) -> usize {
        self.token_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.token_count.is_empty()
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_count.contains_key(token)
    }

    /// Distinct tokens, borrowed
    #[inline]
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_ref()).collect()
    }

    /// `(token, count)` pairs in order of first appearance
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.token_count.iter().map(|(token, &count)| (token.as_ref(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_tokens() {
        let freq = TokenFrequency::from_text("Dan tidak, dan TIDAK dan pedas");
        assert_eq!(freq.token_count("dan"), 3);
        assert_eq!(freq.token_count("tidak"), 2);
        assert_eq!(freq.token_count("pedas"), 1);
        assert_eq!(freq.token_count("gurih"), 0);
        assert_eq!(freq.token_sum(), 6);
        assert_eq!(freq.token_num(), 3);
    }

    #[test]
    fn keeps_first_appearance_order() {
        let freq = TokenFrequency::from_text("kopi pahit kopi murah");
        assert_eq!(freq.token_set_ref_str(), vec!["kopi", "pahit", "murah"]);
    }

    #[test]
    fn empty_text_is_empty() {
        let freq = TokenFrequency::from_text("   ");
        assert!(freq.is_empty());
        assert_eq!(freq.token_sum(), 0);
    }
}

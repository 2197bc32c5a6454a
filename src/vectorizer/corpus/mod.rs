use indexmap::{IndexMap, IndexSet};

use crate::TokenFrequency;

/// Document count and per-token document frequency of a document collection.
/// Base data for the IDF calculation.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// number of documents each token appears in
    token_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            token_counts: IndexMap::new(),
        }
    }

    /// Add a document's distinct tokens to the corpus
    pub fn add_set<T>(&mut self, tokens: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for token in tokens {
            if let Some(count) = self.token_counts.get_mut(token.as_ref()) {
                *count += 1;
            } else {
                self.token_counts.insert(Box::from(token.as_ref()), 1);
            }
        }
    }

    /// Add one document by its token frequency
    #[inline]
    pub fn add_freq(&mut self, freq: &TokenFrequency) {
        self.add_set(&freq.token_set_ref_str());
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `token`
    #[inline]
    pub fn get_token_count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Current vocabulary size (number of unique tokens)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_counts.len()
    }

    /// Vocabulary in lexicographic order.
    /// The position of a token in the returned set is its vector dimension.
    pub fn sorted_vocabulary(&self) -> IndexSet<Box<str>> {
        let mut tokens: Vec<&Box<str>> = self.token_counts.keys().collect();
        tokens.sort_unstable();
        tokens.into_iter().cloned().collect()
    }
}

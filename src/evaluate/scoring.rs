use std::fmt::Debug;

use rayon::prelude::*;

use crate::{index::ProductIndex, utils::math::vector::ZeroSpVec, vectorizer::tfidf::TFIDFEngine};

/// Structure to store search results
pub struct Hits<K> {
    /// (Document key, Score)
    pub list: Vec<(K, f64)>,
}

impl<K> Hits<K> {
    pub fn new(vec: Vec<(K, f64)>) -> Self {
        Hits { list: vec }
    }

    /// Sort results by descending score.
    /// The sort is stable: equal scores keep their current relative order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    /// Keep the entries whose key satisfies `pred`, order unchanged
    pub fn retain_keys<F>(&mut self, mut pred: F) -> &mut Self
    where
        F: FnMut(&K) -> bool,
    {
        self.list.retain(|(k, _)| pred(k));
        self
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for (key, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", key, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<E> ProductIndex<E>
where
    E: TFIDFEngine,
{
    /// Cosine similarity of `query` against every document, keyed by catalog position.
    /// Both sides are unit (or zero) vectors, so cosθ is their dot product.
    /// Scores come back in catalog order, clamped to [0, 1].
    pub fn scoring_cosine(&self, query: &ZeroSpVec<f64>) -> Hits<usize> {
        let list = self
            .documents()
            .par_iter()
            .enumerate()
            .map(|(idx, doc)| (idx, query.dot(doc).clamp(0.0, 1.0)))
            .collect();
        Hits { list }
    }
}

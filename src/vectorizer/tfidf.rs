use indexmap::IndexSet;

use crate::{utils::math::vector::ZeroSpVec, vectorizer::{corpus::Corpus, token::TokenFrequency}};

pub trait TFIDFEngine {
    /// Term weight for a token that appears `count` times in a document
    fn tf(count: u32) -> f64;

    /// Inverse document frequency
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the token
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// Build the IDF vector for the token dimension sample
    /// # Arguments
    /// * `corpus` - corpus
    /// * `token_dim_sample` - vocabulary, position = dimension
    /// # Returns
    /// * `Vec<f64>` - IDF of each dimension
    fn idf_vec(corpus: &Corpus, token_dim_sample: &IndexSet<Box<str>>) -> Vec<f64> {
        let doc_num = corpus.get_doc_num();
        token_dim_sample
            .iter()
            .map(|token| Self::idf(doc_num, corpus.get_token_count(token)))
            .collect()
    }

    /// Build the (unweighted) TF vector of a document.
    /// Tokens outside the sample are dropped.
    fn tf_vec(freq: &TokenFrequency, token_dim_sample: &IndexSet<Box<str>>) -> ZeroSpVec<f64> {
        let pairs = freq.iter().filter_map(|(token, count)| {
            token_dim_sample
                .get_index_of(token)
                .map(|idx| (idx, Self::tf(count)))
        });
        ZeroSpVec::from_pairs(token_dim_sample.len(), pairs)
    }
}

/// Smoothed IDF used by `DefaultTFIDFEngine` and `SublinearTFIDFEngine`.
/// `ln((1 + n) / (1 + df)) + 1`, so a token in every document still weighs 1.
#[inline]
pub fn smooth_idf(doc_num: u64, doc_freq: u64) -> f64 {
    ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Default TF-IDF engine
/// raw count × smoothed IDF
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        smooth_idf(doc_num, doc_freq)
    }
}

/// TF-IDF engine with sublinear TF
/// `1 + ln(count)` × smoothed IDF, damps repeated words
#[derive(Debug, Clone, Copy, Default)]
pub struct SublinearTFIDFEngine;

impl TFIDFEngine for SublinearTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        if count == 0 {
            return 0.0;
        }
        1.0 + (count as f64).ln()
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        smooth_idf(doc_num, doc_freq)
    }
}

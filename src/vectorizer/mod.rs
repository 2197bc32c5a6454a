pub mod analyzer;
pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod serde;

use std::marker::PhantomData;

use ::serde::{Deserialize, Serialize};
use indexmap::IndexSet;
use tracing::warn;

use crate::error::{Error, Result};
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{corpus::Corpus, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, token::TokenFrequency};

/// Fitted TF-IDF model.
/// Holds the vocabulary and the IDF table learned from a document collection.
/// Both are fixed after `fit`; new text is projected with `transform`.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    /// Token dimension sample, position = vector dimension (sorted)
    pub token_dim_sample: IndexSet<Box<str>>,
    /// IDF Vector
    pub idf: IDFVector,
    _marker: PhantomData<E>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IDFVector {
    /// IDF per dimension, dense because every dimension has one
    pub idf_vec: Vec<f64>,
    /// number of documents the model was fitted on
    pub doc_num: u64,
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    /// Learn the vocabulary and IDF from `documents` and return the model
    /// together with the unit TF-IDF vector of every document, in input order.
    ///
    /// # Errors
    /// * `EmptyCatalog` - no documents
    /// * `EmptyVocabulary` - no document yields a token
    pub fn fit<T>(documents: &[T]) -> Result<(Self, Vec<ZeroSpVec<f64>>)>
    where
        T: AsRef<str>,
    {
        if documents.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let freqs: Vec<TokenFrequency> = documents
            .iter()
            .map(|doc| TokenFrequency::from_text(doc.as_ref()))
            .collect();

        let mut corpus = Corpus::new();
        for (idx, freq) in freqs.iter().enumerate() {
            if freq.is_empty() {
                warn!(document = idx, "document has no indexable token, it gets a zero vector");
            }
            corpus.add_freq(freq);
        }
        if corpus.vocab_size() == 0 {
            return Err(Error::EmptyVocabulary);
        }

        let vectorizer = Self::from_corpus(&corpus);
        let vectors = freqs
            .iter()
            .map(|freq| vectorizer.transform_freq(freq))
            .collect();
        Ok((vectorizer, vectors))
    }

    fn from_corpus(corpus: &Corpus) -> Self {
        let token_dim_sample = corpus.sorted_vocabulary();
        let idf_vec = E::idf_vec(corpus, &token_dim_sample);
        Self {
            token_dim_sample,
            idf: IDFVector {
                idf_vec,
                doc_num: corpus.get_doc_num(),
            },
            _marker: PhantomData,
        }
    }

    pub(crate) fn from_parts(token_dim_sample: IndexSet<Box<str>>, idf: IDFVector) -> Result<Self> {
        if token_dim_sample.len() != idf.idf_vec.len() {
            return Err(Error::Snapshot(format!(
                "vocabulary has {} tokens but idf has {} entries",
                token_dim_sample.len(),
                idf.idf_vec.len()
            )));
        }
        Ok(Self {
            token_dim_sample,
            idf,
            _marker: PhantomData,
        })
    }

    /// Project text into the fitted space as a unit vector.
    /// Tokens outside the vocabulary are ignored; text without any known
    /// token gives the zero vector.
    #[inline]
    pub fn transform(&self, text: &str) -> ZeroSpVec<f64> {
        self.transform_freq(&TokenFrequency::from_text(text))
    }

    /// Same as `transform` for an already counted document
    pub fn transform_freq(&self, freq: &TokenFrequency) -> ZeroSpVec<f64> {
        let mut vec = E::tf_vec(freq, &self.token_dim_sample);
        vec.scale_by(&self.idf.idf_vec);
        vec.normalize();
        vec
    }

    /// Dimension of the vector space
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_dim_sample.len()
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.idf.doc_num
    }

    #[inline]
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_dim_sample.contains(token)
    }

    /// IDF of a vocabulary token
    pub fn idf_of(&self, token: &str) -> Option<f64> {
        self.token_dim_sample
            .get_index_of(token)
            .and_then(|idx| self.idf.idf_vec.get(idx).copied())
    }

    /// Vocabulary in dimension order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.token_dim_sample.iter().map(|t| t.as_ref())
    }
}

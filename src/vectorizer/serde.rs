use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    error::{Error, Result},
    index::ProductIndex,
    utils::math::vector::ZeroSpVec,
    vectorizer::{tfidf::TFIDFEngine, IDFVector, TFIDFVectorizer},
};

/// Allowed distance from 1 for the norm of a decoded document vector
const UNIT_NORM_TOLERANCE: f64 = 1e-9;

/// Serializable form of a built index.
/// It does not hold the catalog, so it can be stored apart from the products.
/// Use `into_product_index` with the same catalog to get a `ProductIndex` back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TFIDFData {
    /// vocabulary, position = dimension
    pub token_dim_sample: IndexSet<Box<str>>,
    /// IDF vector
    pub idf: IDFVector,
    /// unit TF-IDF vector of each catalog entry, catalog order
    pub documents: Vec<ZeroSpVec<f64>>,
}

impl TFIDFData {
    /// Encode as CBOR
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    /// Decode from CBOR
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }

    /// Reattach the catalog the data was built from.
    /// Fails when the shapes do not line up with `catalog`, or when a
    /// document vector is malformed or not of unit (or zero) length.
    pub fn into_product_index<E>(self, catalog: Catalog) -> Result<ProductIndex<E>>
    where
        E: TFIDFEngine,
    {
        if self.documents.len() != catalog.len() || self.idf.doc_num != catalog.len() as u64 {
            return Err(Error::Snapshot(format!(
                "snapshot has {} documents, catalog has {} products",
                self.documents.len(),
                catalog.len()
            )));
        }
        let dim = self.token_dim_sample.len();
        if let Some(pos) = self.documents.iter().position(|doc| doc.len() != dim) {
            return Err(Error::Snapshot(format!(
                "document {pos} has dimension {}, vocabulary has {dim}",
                self.documents[pos].len()
            )));
        }
        for (pos, doc) in self.documents.iter().enumerate() {
            doc.check_layout()
                .map_err(|reason| Error::Snapshot(format!("document {pos}: {reason}")))?;
            let norm = doc.norm();
            let unit = (norm - 1.0).abs() <= UNIT_NORM_TOLERANCE;
            if !doc.is_zero_vec() && !unit {
                return Err(Error::Snapshot(format!("document {pos} has norm {norm}, expected 1")));
            }
        }
        if let Some(pos) = self.idf.idf_vec.iter().position(|w| !(w.is_finite() && *w > 0.0)) {
            return Err(Error::Snapshot(format!(
                "idf of term {pos} is {}, expected a positive number",
                self.idf.idf_vec[pos]
            )));
        }
        let vectorizer = TFIDFVectorizer::<E>::from_parts(self.token_dim_sample, self.idf)?;
        Ok(ProductIndex::from_parts(catalog, vectorizer, self.documents))
    }
}

impl<E> From<&ProductIndex<E>> for TFIDFData
where
    E: TFIDFEngine,
{
    fn from(index: &ProductIndex<E>) -> Self {
        Self {
            token_dim_sample: index.vectorizer().token_dim_sample.clone(),
            idf: index.vectorizer().idf.clone(),
            documents: index.documents().to_vec(),
        }
    }
}

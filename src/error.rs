use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Raised at index build time; nothing can be served.
    #[error("Catalog is empty: at least one product is required")]
    EmptyCatalog,

    /// Raised at index build time when no review text yields a single token.
    #[error("Vocabulary is empty: no product review contains an indexable term")]
    EmptyVocabulary,

    #[error("Invalid filter: {reason}")]
    InvalidFilter { reason: String },

    #[error("Query text is blank")]
    BlankQuery,

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(u32),

    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: u32, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl Error {
    pub(crate) fn invalid_filter(reason: impl Into<String>) -> Self {
        Error::InvalidFilter { reason: reason.into() }
    }

    /// Errors the caller can recover from by changing the request.
    /// Everything else happens while building the index and should abort startup.
    pub fn is_query_error(&self) -> bool {
        matches!(self, Error::InvalidFilter { .. } | Error::BlankQuery)
    }
}

impl From<serde_cbor::Error> for Error {
    fn from(e: serde_cbor::Error) -> Self {
        Error::Snapshot(e.to_string())
    }
}

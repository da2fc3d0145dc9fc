use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Corpus error: {0}")]
    CorpusError(#[from] lawlens_corpus::CorpusError),

    #[error("Vector store error: {0}")]
    VectorStoreError(#[from] lawlens_vector_store::VectorStoreError),

    #[error("No indexable offence records")]
    EmptyIndex,

    #[error("Invalid analysis config: {0}")]
    InvalidConfig(String),
}

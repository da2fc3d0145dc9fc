use thiserror::Error;

pub type Result<T> = std::result::Result<T, VectorStoreError>;

#[derive(Error, Debug)]
pub enum VectorStoreError {
    #[error("Invalid vectorizer config: {0}")]
    InvalidConfig(String),

    #[error("Empty vocabulary: corpus has no terms left after stop-word removal")]
    EmptyVocabulary,

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },
}

//! # LawLens Vector Store
//!
//! Bag-of-words vector space over the offence corpus.
//!
//! ## Architecture
//!
//! ```text
//! normalized corpus texts
//!     │
//!     ├──> TfidfVectorizer::fit
//!     │      └─> vocabulary (unigrams + bigrams, capped) + idf
//!     │
//!     └──> CorpusVectors (one L2-normalized row per record)
//!            └─> cosine ranking for query vectors
//! ```
//!
//! ## Example
//!
//! ```
//! use lawlens_vector_store::{CorpusVectors, TfidfVectorizer, VectorizerConfig};
//!
//! let docs = ["criminal intimidation injury", "extortion money", "forgery document"];
//! let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&docs, VectorizerConfig::default())?;
//! let vectors = CorpusVectors::new(matrix);
//!
//! let query = vectorizer.transform("money extortion");
//! let top = vectors.rank(query.view(), 1)?;
//! assert_eq!(top[0].0, 1);
//! # Ok::<(), lawlens_vector_store::VectorStoreError>(())
//! ```

mod error;
mod index;
mod similarity;
mod tfidf;
mod tokenizer;

pub use error::{Result, VectorStoreError};
pub use index::CorpusVectors;
pub use similarity::{cosine_similarity, overlap_count};
pub use tfidf::{TfidfVectorizer, VectorizerConfig, DEFAULT_MAX_FEATURES, DEFAULT_NGRAM_MAX};
pub use tokenizer::{is_stop_word, ngrams, tokenize, ENGLISH_STOP_WORDS};

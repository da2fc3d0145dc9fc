//! # LawLens Text
//!
//! Lexical normalization for incident descriptions and offence records.
//!
//! Both sides of a comparison go through the same pipeline, so the corpus and
//! incoming queries land in one canonical vocabulary:
//!
//! ```text
//! raw text
//!     │
//!     ├──> clean_text      lowercase, straighten quotes, keep [a-z] + whitespace
//!     │
//!     └──> canonicalize    ordered literal synonym rewrite
//!            └─> "threatening to pay" => "intimidationing to money"
//! ```

mod normalize;
mod synonyms;

pub use normalize::{canonicalize, clean_text, normalize};
pub use synonyms::{SynonymTable, LEGAL_SYNONYMS};

//! # LawLens Corpus
//!
//! Loads the fixed table of statutory offence records that every analysis is
//! scored against.
//!
//! Rows whose section id does not coerce to an integer are dropped at load
//! time. Records labelled "Not Available" stay in the table (they are still
//! listed) but are excluded from matching via [`OffenceCorpus::indexable`].

mod error;
mod loader;
mod record;

pub use error::{CorpusError, Result};
pub use loader::{coerce_section_id, OffenceCorpus, RawOffenceRow};
pub use record::{OffenceRecord, NOT_AVAILABLE};

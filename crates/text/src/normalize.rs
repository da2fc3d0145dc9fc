use crate::synonyms::SynonymTable;
use once_cell::sync::Lazy;
use regex::Regex;

static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z\s]").expect("static regex is valid"));

/// Lowercase, straighten curly apostrophes and drop everything that is not
/// `a-z` or whitespace.
///
/// Removed characters are not replaced by a separator, so "don't" becomes
/// "dont" and "fraud/cheating" becomes "fraudcheating".
#[must_use]
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    NON_LETTER.replace_all(&lowered, "").into_owned()
}

/// Map known synonyms onto canonical legal concepts.
#[must_use]
pub fn canonicalize(text: &str) -> String {
    SynonymTable::legal().apply(text)
}

/// Full normalization pipeline: [`clean_text`] followed by [`canonicalize`].
#[must_use]
pub fn normalize(text: &str) -> String {
    canonicalize(&clean_text(text))
}

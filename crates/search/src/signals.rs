/// Lexical triggers that mark a query as describing a legally relevant act.
/// Only gates strong classification; never contributes to the score.
pub const LEGAL_ACTION_WORDS: &[&str] = &[
    "threat", "threaten", "threatening",
    "harm", "hurt", "kill", "beat", "scare", "fear",
    "money", "pay", "payment", "demand", "extort",
    "forgery", "forged", "fake", "cheat", "fraud",
    "message", "messages", "online", "anonymous",
    "force", "abuse", "blackmail", "pressure", "pressuring",
];

/// Per-query flags, computed once from the normalized query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuerySignals {
    /// Any action trigger appears as a substring.
    pub domain_signal: bool,
    /// ("intimidation" or "threat") and "money" both appear.
    pub threat_money_case: bool,
}

impl QuerySignals {
    #[must_use]
    pub fn detect(normalized_query: &str) -> Self {
        Self {
            domain_signal: looks_like_legal_incident(normalized_query),
            threat_money_case: (normalized_query.contains("intimidation")
                || normalized_query.contains("threat"))
                && normalized_query.contains("money"),
        }
    }
}

#[must_use]
pub fn looks_like_legal_incident(normalized_query: &str) -> bool {
    LEGAL_ACTION_WORDS
        .iter()
        .any(|word| normalized_query.contains(word))
}

//! Human-readable rationale for a matched offence.

/// Which text a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    /// Lowercased offence label.
    Offense,
    /// Normalized query.
    Query,
}

struct ExplanationRule {
    /// Fires when any `(subject, needle)` pair matches.
    triggers: &'static [(Subject, &'static str)],
    sentence: &'static str,
}

const RULES: &[ExplanationRule] = &[
    ExplanationRule {
        triggers: &[(Subject::Offense, "intimidation")],
        sentence: "The description involves threatening language, which aligns with criminal intimidation.",
    },
    ExplanationRule {
        triggers: &[(Subject::Offense, "extortion"), (Subject::Query, "money")],
        sentence: "A demand or pressure involving money is mentioned, which is relevant for extortion-related offences.",
    },
    ExplanationRule {
        triggers: &[(Subject::Query, "communication")],
        sentence: "The incident involves communication such as messages or online interaction.",
    },
    ExplanationRule {
        triggers: &[(Subject::Offense, "forgery")],
        sentence: "The issue involves document or signature misuse, which is associated with forgery offences.",
    },
];

pub const FALLBACK_EXPLANATION: &str =
    "This section shares legal characteristics with the described situation.";

/// Join every rule that fires, in table order; fall back to a generic
/// sentence when none does.
#[must_use]
pub fn explain(normalized_query: &str, offense_lowercase: &str) -> String {
    let reasons: Vec<&str> = RULES
        .iter()
        .filter(|rule| {
            rule.triggers.iter().any(|(subject, needle)| match subject {
                Subject::Offense => offense_lowercase.contains(needle),
                Subject::Query => normalized_query.contains(needle),
            })
        })
        .map(|rule| rule.sentence)
        .collect();

    if reasons.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }
    reasons.join(" ")
}

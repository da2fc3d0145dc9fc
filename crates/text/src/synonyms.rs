/// Literal substring → canonical legal concept.
///
/// Applied top to bottom; each rewrite sees the output of the previous ones.
/// The "threatening", "payment" and "messages" entries never fire: "threaten",
/// "pay" and "message" rewrite them first into "intimidationing", "moneyment"
/// and "communications". They stay so the table matches the published list.
pub const LEGAL_SYNONYMS: &[(&str, &str)] = &[
    ("threatened", "intimidation"),
    ("threaten", "intimidation"),
    ("threatening", "intimidation"),
    ("demanded", "extortion"),
    ("demand", "extortion"),
    ("pay", "money"),
    ("payment", "money"),
    ("pressuring", "coercion"),
    ("pressure", "coercion"),
    ("hurt", "injury"),
    ("harm", "injury"),
    ("kill", "injury"),
    ("forged", "forgery"),
    ("signature", "document"),
    ("online", "communication"),
    ("message", "communication"),
    ("messages", "communication"),
    ("anonymous", "conceal"),
];

/// Ordered synonym rewrite table.
#[derive(Debug, Clone, Copy)]
pub struct SynonymTable {
    entries: &'static [(&'static str, &'static str)],
}

impl SynonymTable {
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub const fn legal() -> Self {
        Self::new(LEGAL_SYNONYMS)
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Rewrite `text` entry by entry. Matching is plain substring, not
    /// word-boundary aware: "repay" becomes "remoney".
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (from, to) in self.entries {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        out
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::legal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_in_declaration_order() {
        let table = SynonymTable::legal();
        assert_eq!(table.apply("they threatened me"), "they intimidation me");
        // "threaten" fires before "threatening" gets a chance
        assert_eq!(table.apply("threatening"), "intimidationing");
        assert_eq!(table.apply("messages"), "communications");
    }

    #[test]
    fn longer_entries_are_shadowed_by_their_stems() {
        let table = SynonymTable::legal();
        for (from, shadowed_by) in [
            ("threatening", "threaten"),
            ("payment", "pay"),
            ("messages", "message"),
        ] {
            let first = table.entries().iter().position(|(k, _)| *k == shadowed_by);
            let later = table.entries().iter().position(|(k, _)| *k == from);
            assert!(first < later, "{shadowed_by} must precede {from}");
            assert!(!table.apply(from).contains(from));
        }
        assert_eq!(table.apply("threatening payment messages"), "intimidationing moneyment communications");
    }

    #[test]
    fn substring_matches_inside_longer_words() {
        let table = SynonymTable::legal();
        assert_eq!(table.apply("repay"), "remoney");
        assert_eq!(table.apply("payment"), "moneyment");
    }

    #[test]
    fn custom_table_keeps_its_own_order() {
        const CHAIN: &[(&str, &str)] = &[("a", "b"), ("b", "c")];
        assert_eq!(SynonymTable::new(CHAIN).apply("a"), "c");

        const REVERSED: &[(&str, &str)] = &[("b", "c"), ("a", "b")];
        assert_eq!(SynonymTable::new(REVERSED).apply("a"), "b");
    }
}

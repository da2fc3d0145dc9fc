use lawlens_text::normalize;
use serde::Serialize;

/// Offence label sentinel for rows that carry no real offence text.
pub const NOT_AVAILABLE: &str = "Not Available";

/// A single statutory offence entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffenceRecord {
    #[serde(rename = "ipc_section")]
    pub section_id: String,
    #[serde(rename = "offense")]
    pub offense_label: String,
    pub description: String,
    #[serde(skip)]
    pub normalized_text: String,
    pub url: Option<String>,
    #[serde(rename = "punishment")]
    pub punishment_text: Option<String>,
    #[serde(rename = "cognizable")]
    pub cognizable_flag: Option<String>,
    #[serde(rename = "bailable")]
    pub bailable_flag: Option<String>,
    #[serde(rename = "court")]
    pub court_level: Option<String>,
}

impl OffenceRecord {
    /// Build a record with no passthrough metadata.
    pub fn new(
        section_id: impl Into<String>,
        offense_label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let offense_label = offense_label.into();
        let description = description.into();
        let normalized_text = format!("{} {}", normalize(&description), normalize(&offense_label));
        Self {
            section_id: section_id.into(),
            offense_label,
            description,
            normalized_text,
            url: None,
            punishment_text: None,
            cognizable_flag: None,
            bailable_flag: None,
            court_level: None,
        }
    }

    #[must_use]
    pub fn is_indexable(&self) -> bool {
        self.offense_label != NOT_AVAILABLE
    }
}

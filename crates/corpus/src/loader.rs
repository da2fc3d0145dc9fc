use crate::error::{CorpusError, Result};
use crate::record::OffenceRecord;
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One row as it appears in the source table, before coercion.
///
/// Column names follow the published IPC dataset (`ipc_section`,
/// `Description`, `Offense`, ...); lowercase variants are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOffenceRow {
    #[serde(default, alias = "section", alias = "Section")]
    pub ipc_section: Option<Value>,
    #[serde(default, rename = "Description", alias = "description")]
    pub description: Option<Value>,
    #[serde(default, rename = "Offense", alias = "offense")]
    pub offense: Option<Value>,
    #[serde(default, rename = "URL", alias = "url")]
    pub url: Option<Value>,
    #[serde(default, rename = "Punishment", alias = "punishment")]
    pub punishment: Option<Value>,
    #[serde(default, rename = "Cognizable", alias = "cognizable")]
    pub cognizable: Option<Value>,
    #[serde(default, rename = "Bailable", alias = "bailable")]
    pub bailable: Option<Value>,
    #[serde(default, rename = "Court", alias = "court")]
    pub court: Option<Value>,
}

impl RawOffenceRow {
    /// Coerce into a record, or `None` when the section id is not numeric.
    #[must_use]
    pub fn into_record(self) -> Option<OffenceRecord> {
        let section_id = self.ipc_section.as_ref().and_then(coerce_section_id)?;
        let mut record = OffenceRecord::new(
            section_id,
            scalar_text(self.offense).unwrap_or_default(),
            scalar_text(self.description).unwrap_or_default(),
        );
        record.url = scalar_text(self.url);
        record.punishment_text = scalar_text(self.punishment);
        record.cognizable_flag = scalar_text(self.cognizable);
        record.bailable_flag = scalar_text(self.bailable);
        record.court_level = scalar_text(self.court);
        Some(record)
    }
}

/// Numeric coercion of a section id: `302`, `302.0`, `"302"` and `" 302.0 "`
/// all yield `"302"`. Fractions are truncated toward zero.
#[must_use]
pub fn coerce_section_id(value: &Value) -> Option<String> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let truncated = number.trunc() as i64;
    Some(truncated.to_string())
}

fn scalar_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Ordered, immutable table of offence records.
#[derive(Debug, Clone, Default)]
pub struct OffenceCorpus {
    records: Vec<OffenceRecord>,
}

impl OffenceCorpus {
    #[must_use]
    pub fn from_records(records: Vec<OffenceRecord>) -> Self {
        Self { records }
    }

    /// Coerce raw rows, dropping the ones without a numeric section id.
    #[must_use]
    pub fn from_rows(rows: impl IntoIterator<Item = RawOffenceRow>) -> Self {
        let mut records = Vec::new();
        let mut dropped = 0usize;
        for row in rows {
            match row.into_record() {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!("Dropped {dropped} offence rows without a numeric section id");
        }
        Self { records }
    }

    /// Load a corpus file. The format is picked from the extension.
    ///
    /// Fails with [`CorpusError::NoData`] when no row survives coercion.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let corpus = match extension.as_str() {
            "json" => Self::from_json_slice(&std::fs::read(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CorpusError::UnsupportedFormat(path.display().to_string())),
        };

        if corpus.is_empty() {
            return Err(CorpusError::NoData(path.display().to_string()));
        }
        info!(
            "Loaded {} offence records ({} indexable) from {}",
            corpus.len(),
            corpus.indexable().count(),
            path.display()
        );
        Ok(corpus)
    }

    /// Parse a JSON array of row objects. Objects that do not fit the row
    /// shape are skipped like rows with a bad section id.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let values: Vec<Value> = serde_json::from_slice(bytes)?;
        let rows = values.into_iter().filter_map(|value| {
            serde_json::from_value::<RawOffenceRow>(value)
                .map_err(|err| warn!("Skipping malformed offence row: {err}"))
                .ok()
        });
        Ok(Self::from_rows(rows))
    }

    /// Parse a headed CSV table.
    pub fn from_csv_reader(reader: impl std::io::Read) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    warn!("Skipping unreadable CSV row: {err}");
                    continue;
                }
            };
            let object: serde_json::Map<String, Value> = headers
                .iter()
                .zip(record.iter())
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(header, cell)| (header.trim().to_string(), Value::String(cell.to_string())))
                .collect();
            match serde_json::from_value::<RawOffenceRow>(Value::Object(object)) {
                Ok(row) => rows.push(row),
                Err(err) => warn!("Skipping malformed CSV row: {err}"),
            }
        }
        Ok(Self::from_rows(rows))
    }

    #[must_use]
    pub fn records(&self) -> &[OffenceRecord] {
        &self.records
    }

    /// Records eligible for matching, in load order.
    pub fn indexable(&self) -> impl Iterator<Item = &OffenceRecord> {
        self.records.iter().filter(|record| record.is_indexable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn coerces_numeric_section_ids() {
        assert_eq!(coerce_section_id(&json!(302)), Some("302".to_string()));
        assert_eq!(coerce_section_id(&json!(302.0)), Some("302".to_string()));
        assert_eq!(coerce_section_id(&json!("420")), Some("420".to_string()));
        assert_eq!(coerce_section_id(&json!(" 506.0 ")), Some("506".to_string()));
        assert_eq!(coerce_section_id(&json!("120A")), None);
        assert_eq!(coerce_section_id(&json!("")), None);
        assert_eq!(coerce_section_id(&json!(null)), None);
        assert_eq!(coerce_section_id(&json!("NaN")), None);
    }

    #[test]
    fn json_rows_keep_order_and_drop_bad_sections() {
        let bytes = br#"[
            {"ipc_section": 503, "Description": "Whoever threatens another", "Offense": "Criminal intimidation", "Court": "Any Magistrate"},
            {"ipc_section": "bogus", "Description": "x", "Offense": "y"},
            "not an object",
            {"ipc_section": "1.0", "Description": "Title and extent", "Offense": "Not Available"}
        ]"#;
        let corpus = OffenceCorpus::from_json_slice(bytes).unwrap();
        let ids: Vec<&str> = corpus.records().iter().map(|r| r.section_id.as_str()).collect();
        assert_eq!(ids, vec!["503", "1"]);
        assert_eq!(corpus.records()[0].court_level.as_deref(), Some("Any Magistrate"));
        assert_eq!(corpus.indexable().count(), 1);
    }

    #[test]
    fn csv_rows_map_headers() {
        let csv = "ipc_section,Description,Offense,URL,Punishment,Cognizable,Bailable,Court\n\
                   420,Whoever cheats,Cheating,https://example.org/420,7 Years,Cognizable,Non-Bailable,Magistrate First Class\n\
                   abc,broken,Broken,,,,,\n";
        let corpus = OffenceCorpus::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 1);
        let record = &corpus.records()[0];
        assert_eq!(record.section_id, "420");
        assert_eq!(record.url.as_deref(), Some("https://example.org/420"));
        assert_eq!(record.bailable_flag.as_deref(), Some("Non-Bailable"));
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Timestamp prefix layout inside cluster identifiers, before the `_`
/// delimiter.
const ID_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One clustered news report, as stored in a named collection.
///
/// The pipeline only interprets the identifier (sort order plus an optional
/// timestamp prefix) and the reference links; every other field is opaque
/// and carried through to rendering untouched. Records are read-only here -
/// the clustering ingest owns the collections.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClusterRecord {
    /// Sortable identifier; newer records sort higher.
    pub id: String,

    /// Source article URLs, in display order. Absent for clusters the
    /// ingest produced without references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,

    /// Descriptive fields opaque to the pipeline (title, summary, etc.).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ClusterRecord {
    pub fn has_links(&self) -> bool {
        self.links.is_some()
    }

    /// Reference links, empty when the record has none.
    pub fn links(&self) -> &[String] {
        self.links.as_deref().unwrap_or_default()
    }

    /// Creation timestamp derived from the identifier prefix.
    ///
    /// Identifiers of the timestamped variant look like
    /// `2024-05-01 09:30:00_cluster-7`; anything that does not parse yields
    /// `None`, and recency filtering treats such records as never recent.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let prefix = self
            .id
            .split_once('_')
            .map_or(self.id.as_str(), |(prefix, _)| prefix);
        NaiveDateTime::parse_from_str(prefix, ID_TIMESTAMP_FORMAT).ok()
    }

    /// String field accessor for rendering; missing or non-string fields
    /// come back empty.
    pub fn field_str(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// One ingested article document from the bulk listing.
///
/// The listing serves two purposes: it is rendered as the raw document feed
/// and its URLs form the universe of the per-pass metadata index.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArticleDoc {
    pub id: String,

    /// Source URL, when the ingest recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ArticleDoc {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn field_str(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ClusterRecord {
        ClusterRecord {
            id: id.to_string(),
            links: None,
            fields: Map::new(),
        }
    }

    #[test]
    fn timestamp_parses_identifier_prefix() {
        let ts = record("2024-05-01 09:30:00_cluster-7").timestamp().unwrap();
        assert_eq!(ts.to_string(), "2024-05-01 09:30:00");
    }

    #[test]
    fn timestamp_without_delimiter_parses_whole_id() {
        assert!(record("2024-05-01 09:30:00").timestamp().is_some());
    }

    #[test]
    fn malformed_identifier_has_no_timestamp() {
        assert!(record("cluster-7").timestamp().is_none());
        assert!(record("2024-13-99 09:30:00_x").timestamp().is_none());
    }

    #[test]
    fn links_default_to_empty() {
        let rec = record("2024-05-01 09:30:00_x");
        assert!(!rec.has_links());
        assert!(rec.links().is_empty());
    }
}

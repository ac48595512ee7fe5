//! Data model for search queries, result rows, and detail pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facility name attached to every summary record.
pub const FACILITY: &str = "Sedgwick County Jail";

/// Source tag attached to every summary record.
pub const SOURCE: &str = "sedgwick_county";

/// Search criteria. All fields optional; the facade and CLI require at
/// least one to be non-empty before dispatching a search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub booking_number: String,
}

impl SearchQuery {
    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.last_name.trim().is_empty()
            && self.first_name.trim().is_empty()
            && self.booking_number.trim().is_empty()
    }
}

/// One row of the search results grid.
///
/// Missing cells are filled with the `"N/A"` sentinel rather than being
/// omitted. `inmate_id` is present only when the row's name cell links to
/// a detail page with a numeric `InmateID` parameter.
#[derive(Debug, Clone, Serialize)]
pub struct InmateSummary {
    pub name: String,
    pub booking_number: String,
    pub booking_date: String,
    pub age: String,
    pub gender: String,
    pub race: String,
    pub facility: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inmate_id: Option<String>,
}

/// Parsed detail page: an open label → value mapping plus an optional
/// list of charge strings.
///
/// There is no fixed schema; whatever label/value pairs exist on the
/// page are captured. Serializes flat, with each label as a top-level key
/// and `charges` alongside when a charges table was found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InmateDetail {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charges: Option<Vec<String>>,
}

impl InmateDetail {
    /// True when the page yielded neither labels nor a charges table.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.charges.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_empty_when_all_blank() {
        let q = SearchQuery::default();
        assert!(q.is_empty());

        let q = SearchQuery {
            last_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(q.is_empty());
    }

    #[test]
    fn test_query_not_empty_with_one_field() {
        let q = SearchQuery {
            booking_number: "2024-001".to_string(),
            ..Default::default()
        };
        assert!(!q.is_empty());
    }

    #[test]
    fn test_summary_omits_absent_inmate_id() {
        let summary = InmateSummary {
            name: "DOE, JOHN".to_string(),
            booking_number: "2024-001".to_string(),
            booking_date: "01/15/2024".to_string(),
            age: "34".to_string(),
            gender: "M".to_string(),
            race: "W".to_string(),
            facility: FACILITY.to_string(),
            source: SOURCE.to_string(),
            inmate_id: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("inmate_id").is_none());
        assert_eq!(json["facility"], FACILITY);
    }

    #[test]
    fn test_detail_serializes_flat() {
        let mut fields = BTreeMap::new();
        fields.insert("Height:".to_string(), "5'10\"".to_string());
        let detail = InmateDetail {
            fields,
            charges: Some(vec!["THEFT".to_string()]),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["Height:"], "5'10\"");
        assert_eq!(json["charges"][0], "THEFT");
    }
}

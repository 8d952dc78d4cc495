//! Publication domain model

use crate::de;
use serde::{Deserialize, Serialize};

/// A publication (paper, preprint, book chapter, etc.)
///
/// Every field except `id` is optional in the source data; absent or
/// wrong-typed fields are defaulted so the record still renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Opaque stable identifier, unique within a dataset.
    /// Numeric ids in the source JSON are normalized to strings.
    #[serde(default, deserialize_with = "de::id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub title: String,
    /// Full formatted citation line, as displayed.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub citation: String,
    /// Publication year; 0 when absent (sorts before every real year).
    #[serde(default, deserialize_with = "de::lenient_year")]
    pub year: i32,
    /// Entry kind tag; the literal "preprint" triggers a badge.
    #[serde(rename = "type", default, deserialize_with = "de::lenient_opt_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_opt_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::topic_list")]
    pub topics: Vec<String>,
}

impl Publication {
    /// Create a publication with the fields every record carries.
    pub fn new(id: String, title: String, year: i32) -> Self {
        Self {
            id,
            title,
            citation: String::new(),
            year,
            kind: None,
            link: None,
            topics: Vec::new(),
        }
    }

    /// Builder method to set the citation line
    pub fn with_citation(mut self, citation: String) -> Self {
        self.citation = citation;
        self
    }

    /// Builder method to set the entry kind
    pub fn with_kind(mut self, kind: String) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Builder method to set the external link
    pub fn with_link(mut self, link: String) -> Self {
        self.link = Some(link);
        self
    }

    /// Builder method to set topic tags
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }

    /// Whether this record is a preprint (drives the badge).
    pub fn is_preprint(&self) -> bool {
        self.kind.as_deref() == Some("preprint")
    }
}

impl Default for Publication {
    fn default() -> Self {
        Self::new(String::new(), String::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_publication_new() {
        let pub_ = Publication::new("p1".to_string(), "Graph Theory".to_string(), 2020);
        assert_eq!(pub_.id, "p1");
        assert_eq!(pub_.year, 2020);
        assert!(pub_.topics.is_empty());
        assert!(!pub_.is_preprint());
    }

    #[test]
    fn test_is_preprint() {
        let pub_ = Publication::new("p1".to_string(), "T".to_string(), 2024)
            .with_kind("preprint".to_string());
        assert!(pub_.is_preprint());

        let other = Publication::new("p2".to_string(), "T".to_string(), 2024)
            .with_kind("article".to_string());
        assert!(!other.is_preprint());
    }

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": "smith2022",
            "title": "A Study",
            "citation": "Smith, J. (2022). A Study. Nature.",
            "year": 2022,
            "type": "preprint",
            "link": "https://example.org/paper",
            "topics": ["ml", "nlp"]
        }"#;
        let pub_: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(pub_.title, "A Study");
        assert_eq!(pub_.year, 2022);
        assert!(pub_.is_preprint());
        assert_eq!(pub_.topics, vec!["ml", "nlp"]);
    }

    #[test]
    fn deserialize_numeric_id() {
        let pub_: Publication = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(pub_.id, "7");
    }

    #[test]
    fn deserialize_missing_fields_default() {
        let pub_: Publication = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert_eq!(pub_.title, "");
        assert_eq!(pub_.citation, "");
        assert_eq!(pub_.year, 0);
        assert!(pub_.kind.is_none());
        assert!(pub_.link.is_none());
        assert!(pub_.topics.is_empty());
    }

    #[test]
    fn deserialize_wrong_typed_fields_default() {
        let json = r#"{
            "id": "x",
            "title": 42,
            "year": "2019",
            "type": 3,
            "topics": "ml"
        }"#;
        let pub_: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(pub_.title, "42");
        assert_eq!(pub_.year, 2019);
        assert!(pub_.kind.is_none());
        assert!(pub_.topics.is_empty());
    }

    #[rstest]
    #[case(r#"2019"#, 2019)]
    #[case(r#""2019""#, 2019)]
    #[case(r#"" 2019 ""#, 2019)]
    #[case(r#"2019.7"#, 2019)]
    #[case(r#"null"#, 0)]
    #[case(r#""sometime""#, 0)]
    #[case(r#"[2019]"#, 0)]
    fn deserialize_lenient_year(#[case] year_json: &str, #[case] expected: i32) {
        let json = format!(r#"{{"id": "x", "year": {}}}"#, year_json);
        let pub_: Publication = serde_json::from_str(&json).unwrap();
        assert_eq!(pub_.year, expected);
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let pub_: Publication =
            serde_json::from_str(r#"{"id": "x", "venue": "NeurIPS"}"#).unwrap();
        assert_eq!(pub_.id, "x");
    }
}

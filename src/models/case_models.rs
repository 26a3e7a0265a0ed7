use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseKind {
    Suggestions,
    Bugs
}

impl CaseKind {
    /// The key of the document holding every case of this kind.
    pub fn document_id(self) -> &'static str {
        match self {
            CaseKind::Suggestions => "suggestions",
            CaseKind::Bugs => "bugs"
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CaseKind::Suggestions => "Suggestion",
            CaseKind::Bugs => "Bug"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, poise::ChoiceParameter)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[name = "website"]
    Website,
    #[name = "bot"]
    Bot
}

impl SourceType {
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Website => "website",
            SourceType::Bot => "bot"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugSource {
    pub source_type: SourceType,
    pub source: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub description: String,
    pub author: String,
    pub time: DateTime<Utc>,
    /// The developer who has looked at this case.
    pub seen: Option<String>,
    #[serde(flatten)]
    pub source: Option<BugSource>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCollection {
    /// The id the next case will get.
    pub number: u64,
    pub cases: BTreeMap<String, CaseRecord>
}

impl Default for CaseCollection {
    fn default() -> Self {
        Self {
            number: 1,
            cases: BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bug_records_flatten_their_source() {
        let record = CaseRecord {
            description: "crash".to_string(),
            author: "1".to_string(),
            time: Utc.timestamp_opt(0, 0).unwrap(),
            seen: None,
            source: Some(BugSource { source_type: SourceType::Bot, source: "hangman".to_string() })
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source_type"], "bot");
        assert_eq!(json["source"], "hangman");
        assert!(json["seen"].is_null());

        assert_eq!(serde_json::from_value::<CaseRecord>(json).unwrap(), record);
    }

    #[test]
    fn suggestion_records_have_no_source() {
        let json = serde_json::json!({
            "description": "more games",
            "author": "2",
            "time": "2020-01-01T00:00:00Z",
            "seen": "3"
        });

        let record: CaseRecord = serde_json::from_value(json).unwrap();
        assert!(record.source.is_none());
        assert_eq!(record.seen.as_deref(), Some("3"));
    }
}

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};

use crate::error::StoreError;

/// One recorded question. `response` is omitted from the file when the
/// variant does not store replies; `quizzed` defaults to false for documents
/// written before the flag existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub time: NaiveDateTime,
    #[serde(default)]
    pub quizzed: bool,
}

/// The full persisted document. Insertion order is chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDoc {
    pub interactions: Vec<Interaction>,
}

/// File-backed interaction log. Every mutation is reload-modify-rewrite;
/// a single active session is assumed, so no locking.
#[derive(Debug, Clone)]
pub struct InteractionStore {
    path: PathBuf,
}

impl InteractionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted document. Fails open: a missing or unparseable
    /// file yields an empty document, never an error.
    pub async fn load(&self) -> HistoryDoc {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "History file unreadable, starting empty");
                return HistoryDoc::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "History file unparseable, starting empty");
                HistoryDoc::default()
            }
        }
    }

    /// Overwrite the backing file with the full document, pretty-printed
    /// with 4-space indentation.
    pub async fn save(&self, doc: &HistoryDoc) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;
        fs::write(&self.path, buf).await?;
        debug!(path = %self.path.display(), interactions = doc.interactions.len(), "Saved history");
        Ok(())
    }

    /// Load, push a new record stamped with the current local time, save.
    #[instrument(skip(self, query, response), fields(path = %self.path.display()))]
    pub async fn append(&self, query: String, response: Option<String>) -> Result<(), StoreError> {
        let mut doc = self.load().await;
        doc.interactions.push(Interaction {
            query,
            response,
            time: Local::now().naive_local(),
            quizzed: false,
        });
        self.save(&doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(query: &str) -> Interaction {
        Interaction {
            query: query.to_string(),
            response: None,
            time: Local::now().naive_local(),
            quizzed: false,
        }
    }

    #[test]
    fn response_key_is_omitted_when_absent() {
        let json = serde_json::to_string(&record("q")).unwrap();
        assert!(!json.contains("\"response\""));
        assert!(json.contains("\"quizzed\":false"));
    }

    #[test]
    fn response_key_is_written_when_present() {
        let mut rec = record("q");
        rec.response = Some("a".to_string());
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"response\":\"a\""));
    }

    #[test]
    fn documents_without_quizzed_flag_still_parse() {
        let raw = r#"{
            "interactions": [
                {
                    "query": "What is entropy?",
                    "response": "A measure of disorder.",
                    "time": "2026-08-21T10:15:30.123456"
                }
            ]
        }"#;
        let doc: HistoryDoc = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.interactions.len(), 1);
        assert!(!doc.interactions[0].quizzed);
        assert_eq!(
            doc.interactions[0].response.as_deref(),
            Some("A measure of disorder.")
        );
    }
}

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{LinkRecord, TopicLinkEntry, TopicLinkTable};

#[derive(Deserialize)]
struct TopicEntryFile {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

/// Parses `{"topic": {"keywords": [...], "links": [{url, title, type}]}}`, keeping
/// topics in file order.
pub fn parse_topic_links(raw: &str) -> Result<TopicLinkTable, LinkTableError> {
    let topics: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| LinkTableError::Malformed(e.to_string()))?;

    let entries = topics
        .into_iter()
        .map(|(topic, value)| {
            let entry: TopicEntryFile = serde_json::from_value(value)
                .map_err(|e| LinkTableError::Malformed(format!("topic {topic:?}: {e}")))?;
            Ok(TopicLinkEntry {
                topic,
                keywords: entry.keywords,
                links: entry.links,
            })
        })
        .collect::<Result<Vec<_>, LinkTableError>>()?;

    Ok(TopicLinkTable::new(entries))
}

/// Loads the table once at start-up. A missing file yields an empty table.
pub async fn load_topic_links(path: impl AsRef<Path>) -> Result<TopicLinkTable, LinkTableError> {
    let path = path.as_ref();
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "link table not found, link suggestions disabled");
            return Ok(TopicLinkTable::default());
        }
        Err(e) => {
            return Err(LinkTableError::Unreadable {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let table = parse_topic_links(&raw)?;
    info!(path = %path.display(), topics = table.len(), "link table loaded");
    Ok(table)
}

#[derive(Debug, thiserror::Error)]
pub enum LinkTableError {
    #[error("cannot read link table {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed link table: {0}")]
    Malformed(String),
}

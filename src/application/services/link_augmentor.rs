use std::sync::Arc;

use tracing::debug;

use crate::domain::{Language, LinkRecord, TopicLinkTable};

pub const MAX_LINKS: usize = 5;

pub const LINK_TRIGGER_KEYWORDS: [&str; 9] = [
    "link",
    "website",
    "maps",
    "blog",
    "video",
    "xem",
    "tìm",
    "giới thiệu",
    "recommend",
];

/// Whether `query` asks for supplementary links at all.
pub fn wants_links(query: &str) -> bool {
    let query = query.to_lowercase();
    LINK_TRIGGER_KEYWORDS.iter().any(|k| query.contains(k))
}

pub struct LinkAugmentor {
    table: Arc<TopicLinkTable>,
}

impl LinkAugmentor {
    pub fn new(table: Arc<TopicLinkTable>) -> Self {
        Self { table }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(TopicLinkTable::default()))
    }

    /// Links of every matching entry, in table order, capped at [`MAX_LINKS`].
    ///
    /// `language` is accepted for symmetry with the rest of the pipeline; the table is
    /// not partitioned by language.
    pub fn lookup(&self, topic: &str, language: Language) -> Vec<LinkRecord> {
        let topic_lower = topic.to_lowercase();
        let links: Vec<LinkRecord> = self
            .table
            .entries()
            .iter()
            .filter(|entry| entry.matches(&topic_lower))
            .flat_map(|entry| entry.links.iter().cloned())
            .take(MAX_LINKS)
            .collect();

        debug!(language = %language, count = links.len(), "topic links resolved");
        links
    }
}

use super::LinkRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct TopicLinkEntry {
    pub topic: String,
    pub keywords: Vec<String>,
    pub links: Vec<LinkRecord>,
}

impl TopicLinkEntry {
    /// Case-insensitive: the topic key or any keyword must occur inside `text_lower`.
    pub fn matches(&self, text_lower: &str) -> bool {
        text_lower.contains(&self.topic.to_lowercase())
            || self
                .keywords
                .iter()
                .any(|k| text_lower.contains(&k.to_lowercase()))
    }
}

/// Static topic to links table, kept in the order it was supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicLinkTable {
    entries: Vec<TopicLinkEntry>,
}

impl TopicLinkTable {
    pub fn new(entries: Vec<TopicLinkEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TopicLinkEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

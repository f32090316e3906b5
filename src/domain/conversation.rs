use super::text::{char_prefix, truncate_with_ellipsis};
use super::{ConversationId, Language, MessageRole, Turn};
use chrono::{DateTime, Utc};

pub const DEFAULT_TITLE: &str = "New Conversation";
pub const PREVIEW_CHARS: usize = 100;
pub const TITLE_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub language: Language,
    pub turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(language: Language) -> Self {
        Self::with_id(ConversationId::new(), language)
    }

    pub fn with_id(id: ConversationId, language: Language) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            language,
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a turn stamped no earlier than anything already recorded.
    pub fn push_turn(&mut self, role: MessageRole, content: String) {
        let now = self.next_timestamp();
        self.turns.push(Turn::at(role, content, now));
        self.updated_at = now;
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.updated_at = self.next_timestamp();
    }

    pub fn summary(&self) -> ConversationSummary {
        let last_message = self
            .turns
            .last()
            .map(|t| char_prefix(&t.content, PREVIEW_CHARS).to_string())
            .unwrap_or_default();

        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            last_message,
            created_at: self.created_at,
            updated_at: self.updated_at,
            message_count: self.turns.len(),
        }
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let latest_turn = self.turns.last().map(|t| t.created_at);
        let floor = latest_turn.map_or(self.updated_at, |t| t.max(self.updated_at));
        Utc::now().max(floor)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
    pub last_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

/// Title derived from the opening message of a conversation.
pub fn title_from_first_message(message: &str) -> String {
    truncate_with_ellipsis(message, TITLE_CHARS)
}

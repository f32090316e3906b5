use super::MessageRole;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn at(role: MessageRole, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            role,
            content,
            created_at,
        }
    }
}

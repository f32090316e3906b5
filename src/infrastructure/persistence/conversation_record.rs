use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Conversation, ConversationId, DEFAULT_TITLE, Language, MessageRole, Turn};

pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of one conversation document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default = "legacy_schema")]
    pub schema_version: u32,
    pub conversation_id: ConversationId,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Vec<TurnRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub role: MessageRole,
    pub content: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

fn legacy_schema() -> u32 {
    0
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl From<&Conversation> for ConversationRecord {
    fn from(conversation: &Conversation) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            conversation_id: conversation.id,
            title: conversation.title.clone(),
            language: conversation.language,
            created_at: Some(conversation.created_at),
            updated_at: Some(conversation.updated_at),
            messages: conversation
                .turns
                .iter()
                .map(|t| TurnRecord {
                    role: t.role,
                    content: t.content.clone(),
                    timestamp: t.created_at,
                })
                .collect(),
        }
    }
}

impl From<ConversationRecord> for Conversation {
    fn from(record: ConversationRecord) -> Self {
        let turns: Vec<Turn> = record
            .messages
            .into_iter()
            .map(|m| Turn::at(m.role, m.content, m.timestamp))
            .collect();

        let latest_turn = turns.last().map(|t| t.created_at);
        let created_at = record
            .created_at
            .or_else(|| turns.first().map(|t| t.created_at))
            .or(record.updated_at)
            .unwrap_or_else(Utc::now);
        let updated_at = record
            .updated_at
            .into_iter()
            .chain(latest_turn)
            .max()
            .unwrap_or(created_at);

        Conversation {
            id: record.conversation_id,
            title: record.title,
            language: record.language,
            turns,
            created_at,
            updated_at,
        }
    }
}

/// RFC 3339 on write; naive ISO-8601 timestamps without an offset are read as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Ok(with_offset.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| format!("invalid timestamp {raw:?}: {e}"))
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(ts) => super::serialize(ts, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::parse(&raw).map_err(D::Error::custom))
                .transpose()
        }
    }
}

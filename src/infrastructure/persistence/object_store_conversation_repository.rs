use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, instrument, warn};

use super::conversation_record::ConversationRecord;
use crate::application::ports::{ConversationRepository, ConversationStoreError, Exchange};
use crate::domain::{
    Conversation, ConversationId, ConversationSummary, Language, MessageRole,
};

const CONVERSATIONS_PREFIX: &str = "conversations";
const RECORD_EXTENSION: &str = "json";
const LIST_CONCURRENCY: usize = 8;

enum Stored {
    Missing,
    Malformed(String),
    Found(Conversation),
}

type LockMap = Mutex<HashMap<ConversationId, Arc<AsyncMutex<()>>>>;

/// Share of one conversation's lock. Dropping the last lease removes the map entry,
/// including when the owning future is cancelled while waiting or writing.
struct LockLease<'a> {
    locks: &'a LockMap,
    id: ConversationId,
    lock: Arc<AsyncMutex<()>>,
}

impl Drop for LockLease<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the map, one held here.
        if Arc::strong_count(&self.lock) == 2 {
            locks.remove(&self.id);
        }
    }
}

/// Conversation store keeping one JSON document per conversation in an [`ObjectStore`].
///
/// Every mutation is a read-modify-write of the whole document, serialised per
/// conversation id through an async lock. Locks are created on demand and dropped
/// again once nobody waits on them.
pub struct ObjectStoreConversationRepository {
    store: Arc<dyn ObjectStore>,
    locks: LockMap,
}

impl ObjectStoreConversationRepository {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn record_path(id: ConversationId) -> StorePath {
        StorePath::from(format!("{CONVERSATIONS_PREFIX}/{id}.{RECORD_EXTENSION}"))
    }

    fn lease(&self, id: ConversationId) -> LockLease<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        LockLease {
            locks: &self.locks,
            id,
            lock: Arc::clone(locks.entry(id).or_default()),
        }
    }

    async fn read(&self, path: &StorePath) -> Result<Stored, ConversationStoreError> {
        let bytes = match self.store.get(path).await {
            Ok(result) => result.bytes().await.map_err(unavailable)?,
            Err(object_store::Error::NotFound { .. }) => return Ok(Stored::Missing),
            Err(e) => return Err(unavailable(e)),
        };

        match serde_json::from_slice::<ConversationRecord>(&bytes) {
            Ok(record) => Ok(Stored::Found(record.into())),
            Err(e) => Ok(Stored::Malformed(e.to_string())),
        }
    }

    async fn write(&self, conversation: &Conversation) -> Result<(), ConversationStoreError> {
        let body = serde_json::to_vec_pretty(&ConversationRecord::from(conversation))
            .map_err(|e| ConversationStoreError::StorageUnavailable(e.to_string()))?;

        self.store
            .put(&Self::record_path(conversation.id), PutPayload::from(body))
            .await
            .map_err(unavailable)?;
        Ok(())
    }

    /// Applies `change` under the conversation's lock. A missing conversation is created
    /// first when `bootstrap` carries a language, otherwise nothing is written.
    async fn mutate<F>(
        &self,
        id: ConversationId,
        bootstrap: Option<Language>,
        change: F,
    ) -> Result<bool, ConversationStoreError>
    where
        F: FnOnce(&mut Conversation) + Send,
    {
        let lease = self.lease(id);
        let _guard = lease.lock.lock().await;
        self.mutate_locked(id, bootstrap, change).await
    }

    async fn mutate_locked<F>(
        &self,
        id: ConversationId,
        bootstrap: Option<Language>,
        change: F,
    ) -> Result<bool, ConversationStoreError>
    where
        F: FnOnce(&mut Conversation) + Send,
    {
        let mut conversation = match self.read(&Self::record_path(id)).await? {
            Stored::Found(conversation) => conversation,
            Stored::Missing => match bootstrap {
                Some(language) => {
                    debug!(conversation_id = %id, "bootstrapping conversation");
                    Conversation::with_id(id, language)
                }
                None => return Ok(false),
            },
            Stored::Malformed(reason) => {
                warn!(conversation_id = %id, reason = %reason, "refusing to overwrite malformed record");
                return Err(ConversationStoreError::MalformedRecord(reason));
            }
        };

        change(&mut conversation);
        self.write(&conversation).await?;
        Ok(true)
    }
}

#[async_trait]
impl ConversationRepository for ObjectStoreConversationRepository {
    #[instrument(skip(self))]
    async fn create(&self, language: Language) -> Result<ConversationId, ConversationStoreError> {
        let conversation = Conversation::new(language);
        self.write(&conversation).await?;
        debug!(conversation_id = %conversation.id, "conversation created");
        Ok(conversation.id)
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn get(
        &self,
        id: ConversationId,
    ) -> Result<Option<Conversation>, ConversationStoreError> {
        match self.read(&Self::record_path(id)).await? {
            Stored::Found(conversation) => Ok(Some(conversation)),
            Stored::Missing => Ok(None),
            Stored::Malformed(reason) => {
                warn!(reason = %reason, "malformed conversation record treated as missing");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    async fn list_summaries(
        &self,
        limit: usize,
    ) -> Result<Vec<ConversationSummary>, ConversationStoreError> {
        let prefix = StorePath::from(CONVERSATIONS_PREFIX);
        let paths: Vec<StorePath> = self
            .store
            .list(Some(&prefix))
            .map_ok(|meta| meta.location)
            .try_filter(|location| {
                futures::future::ready(location.extension() == Some(RECORD_EXTENSION))
            })
            .try_collect()
            .await
            .map_err(unavailable)?;

        let loaded: Vec<(StorePath, Stored)> = futures::stream::iter(paths)
            .map(|path| async move {
                let stored = self.read(&path).await?;
                Ok::<_, ConversationStoreError>((path, stored))
            })
            .buffer_unordered(LIST_CONCURRENCY)
            .try_collect()
            .await?;

        let mut summaries: Vec<ConversationSummary> = loaded
            .into_iter()
            .filter_map(|(path, stored)| match stored {
                Stored::Found(conversation) => Some(conversation.summary()),
                Stored::Malformed(reason) => {
                    warn!(path = %path, reason = %reason, "skipping malformed conversation record");
                    None
                }
                // Deleted between listing and reading.
                Stored::Missing => None,
            })
            .collect();

        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        summaries.truncate(limit);
        Ok(summaries)
    }

    #[instrument(skip(self, role, content), fields(conversation_id = %id, role = %role))]
    async fn append_turn(
        &self,
        id: ConversationId,
        role: MessageRole,
        content: &str,
        language: Language,
    ) -> Result<(), ConversationStoreError> {
        let content = content.to_string();
        self.mutate(id, Some(language), move |conversation| {
            conversation.push_turn(role, content);
        })
        .await
        .map(|_| ())
    }

    #[instrument(skip(self, exchange), fields(conversation_id = %id))]
    async fn append_exchange(
        &self,
        id: ConversationId,
        exchange: &Exchange,
    ) -> Result<(), ConversationStoreError> {
        self.mutate(id, Some(exchange.language), |conversation| {
            conversation.push_turn(MessageRole::User, exchange.user_content.clone());
            conversation.push_turn(MessageRole::Assistant, exchange.assistant_content.clone());
            if let Some(title) = &exchange.title {
                conversation.rename(title.clone());
            }
        })
        .await
        .map(|_| ())
    }

    #[instrument(skip(self, title), fields(conversation_id = %id))]
    async fn set_title(&self, id: ConversationId, title: &str) -> Result<(), ConversationStoreError> {
        let title = title.to_string();
        let written = self
            .mutate(id, None, move |conversation| conversation.rename(title))
            .await?;
        if !written {
            debug!("title update ignored for unknown conversation");
        }
        Ok(())
    }

    #[instrument(skip(self), fields(conversation_id = %id))]
    async fn delete(&self, id: ConversationId) -> Result<bool, ConversationStoreError> {
        let path = Self::record_path(id);
        let lease = self.lease(id);
        let _guard = lease.lock.lock().await;
        match self.store.head(&path).await {
            Ok(_) => self.store.delete(&path).await.map(|_| true).map_err(unavailable),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(unavailable(e)),
        }
    }
}

fn unavailable(e: object_store::Error) -> ConversationStoreError {
    ConversationStoreError::StorageUnavailable(e.to_string())
}

use std::sync::Arc;

use tracing::{instrument, warn};

use crate::application::ports::{Embedder, VectorStore};
use crate::domain::{RetrievedPassage, SourceSummary};

pub const DEFAULT_TOP_K: usize = 4;

/// Passages for one query plus their citation summaries, both best match first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrievedContext {
    pub passages: Vec<RetrievedPassage>,
    pub sources: Vec<SourceSummary>,
}

impl RetrievedContext {
    pub fn contexts(&self) -> Vec<&str> {
        self.passages.iter().map(|p| p.text.as_str()).collect()
    }
}

pub struct ContextRetriever {
    embedder: Arc<dyn Embedder>,
    vector_store: Option<Arc<dyn VectorStore>>,
    top_k: usize,
}

impl ContextRetriever {
    pub fn new(embedder: Arc<dyn Embedder>, vector_store: Option<Arc<dyn VectorStore>>) -> Self {
        Self {
            embedder,
            vector_store,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub async fn retrieve(&self, query: &str) -> RetrievedContext {
        self.retrieve_top(query, self.top_k).await
    }

    /// Never fails: an absent index or any upstream error yields an empty context.
    #[instrument(skip(self, query))]
    pub async fn retrieve_top(&self, query: &str, k: usize) -> RetrievedContext {
        let Some(vector_store) = &self.vector_store else {
            return RetrievedContext::default();
        };

        let embedding = match self.embedder.embed(query).await {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!(error = %e, "query embedding failed, continuing without context");
                return RetrievedContext::default();
            }
        };

        let results = match vector_store.search(&embedding, k).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "vector search failed, continuing without context");
                return RetrievedContext::default();
            }
        };

        let passages: Vec<RetrievedPassage> = results
            .into_iter()
            .map(|r| RetrievedPassage {
                text: r.chunk.text,
                source: r.chunk.source,
                language: r.chunk.language,
                score: r.score,
            })
            .collect();
        let sources = passages.iter().map(SourceSummary::from).collect();

        RetrievedContext { passages, sources }
    }
}

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::{
    CollectionConfig, Embedder, EmbedderError, TextSplitter, TextSplitterError, VectorStore,
    VectorStoreError,
};
use crate::domain::KnowledgeDocument;

pub const DEFAULT_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub documents: usize,
    pub chunks: usize,
    pub collection_created: bool,
}

/// Loads knowledge documents into the vector index used by retrieval.
pub struct KnowledgeSeeder {
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<dyn VectorStore>,
    text_splitter: Arc<dyn TextSplitter>,
    collection: CollectionConfig,
    batch_size: usize,
}

impl KnowledgeSeeder {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        vector_store: Arc<dyn VectorStore>,
        text_splitter: Arc<dyn TextSplitter>,
        collection: CollectionConfig,
    ) -> Self {
        Self {
            embedder,
            vector_store,
            text_splitter,
            collection,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Drops the collection if it exists.
    pub async fn reset(&self) -> Result<(), SeedError> {
        if self
            .vector_store
            .collection_exists()
            .await
            .map_err(SeedError::Storage)?
        {
            self.vector_store
                .delete_collection()
                .await
                .map_err(SeedError::Storage)?;
            info!("existing collection dropped");
        }
        Ok(())
    }

    #[instrument(skip(self, documents), fields(documents = documents.len()))]
    pub async fn seed(&self, documents: &[KnowledgeDocument]) -> Result<SeedReport, SeedError> {
        let existing = self
            .vector_store
            .collection_vector_size()
            .await
            .map_err(SeedError::Storage)?;
        if let Some(actual) = existing.filter(|&size| size != self.collection.vector_dimensions) {
            return Err(SeedError::DimensionMismatch {
                expected: self.collection.vector_dimensions,
                actual,
            });
        }

        let collection_created = self
            .vector_store
            .create_collection(&self.collection)
            .await
            .map_err(SeedError::Storage)?;

        let mut report = SeedReport {
            collection_created,
            ..SeedReport::default()
        };

        for document in documents {
            let chunks = self
                .text_splitter
                .split(document)
                .await
                .map_err(SeedError::Splitting)?;

            for batch in chunks.chunks(self.batch_size) {
                let texts: Vec<&str> = batch.iter().map(|c| c.text.as_str()).collect();
                let embeddings = self
                    .embedder
                    .embed_batch(&texts)
                    .await
                    .map_err(SeedError::Embedding)?;

                self.vector_store
                    .upsert(batch, &embeddings)
                    .await
                    .map_err(SeedError::Storage)?;
            }

            info!(
                source = %document.source,
                language = %document.language,
                chunks = chunks.len(),
                "document seeded"
            );
            report.documents += 1;
            report.chunks += chunks.len();
        }

        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("splitting: {0}")]
    Splitting(TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(EmbedderError),
    #[error("vector store: {0}")]
    Storage(VectorStoreError),
    #[error("collection holds {actual}-dimensional vectors, embedder produces {expected}")]
    DimensionMismatch { expected: u64, actual: u64 },
}

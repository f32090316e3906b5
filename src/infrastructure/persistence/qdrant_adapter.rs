use async_trait::async_trait;
use qdrant_client::{Qdrant, QdrantError};
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::vectors_config::Config as VectorsConfigKind;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, CreateFieldIndexCollectionBuilder, Distance, FieldType, PointId,
    PointStruct, SearchPointsBuilder, UpsertPointsBuilder, Value as QdrantValue,
    VectorParamsBuilder, VectorsConfig,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::application::ports::{
    CollectionConfig, DistanceMetric, PayloadFieldType, SearchResult, VectorStore, VectorStoreError,
};
use crate::domain::{Chunk, ChunkId, Embedding};

const UNKNOWN: &str = "unknown";

impl From<&DistanceMetric> for Distance {
    fn from(metric: &DistanceMetric) -> Self {
        match metric {
            DistanceMetric::Cosine => Distance::Cosine,
            DistanceMetric::Euclidean => Distance::Euclid,
            DistanceMetric::DotProduct => Distance::Dot,
        }
    }
}

impl From<&PayloadFieldType> for FieldType {
    fn from(field_type: &PayloadFieldType) -> Self {
        match field_type {
            PayloadFieldType::Keyword => FieldType::Keyword,
            PayloadFieldType::Integer => FieldType::Integer,
            PayloadFieldType::Float => FieldType::Float,
            PayloadFieldType::Text => FieldType::Text,
        }
    }
}

fn unreachable_store(e: QdrantError) -> VectorStoreError {
    VectorStoreError::ConnectionFailed(e.to_string())
}

pub struct QdrantAdapter {
    client: Arc<Qdrant>,
    collection_name: String,
}

impl QdrantAdapter {
    pub fn new(url: &str, collection_name: String) -> Result<Self, VectorStoreError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(unreachable_store)?;

        Ok(Self {
            client: Arc::new(client),
            collection_name,
        })
    }

    fn payload_for(chunk: &Chunk) -> HashMap<String, serde_json::Value> {
        HashMap::from([
            ("text".to_string(), serde_json::Value::from(chunk.text.as_str())),
            ("source".to_string(), serde_json::Value::from(chunk.source.as_str())),
            ("language".to_string(), serde_json::Value::from(chunk.language.as_str())),
            ("position".to_string(), serde_json::Value::from(chunk.position as u64)),
        ])
    }

    fn payload_str(payload: &HashMap<String, QdrantValue>, key: &str) -> Option<String> {
        payload.get(key)?.as_str().map(|s| s.to_string())
    }
}

#[async_trait]
impl VectorStore for QdrantAdapter {
    #[instrument(skip(self, config), fields(collection = %self.collection_name))]
    async fn create_collection(&self, config: &CollectionConfig) -> Result<bool, VectorStoreError> {
        if self.collection_exists().await? {
            debug!("knowledge collection already present");
            return Ok(false);
        }

        let vectors = VectorParamsBuilder::new(
            config.vector_dimensions,
            Distance::from(&config.distance_metric),
        );
        let request = CreateCollectionBuilder::new(&self.collection_name)
            .vectors_config(VectorsConfig::from(vectors));

        self.client
            .create_collection(request)
            .await
            .map_err(|e| VectorStoreError::CollectionCreationFailed(e.to_string()))?;

        info!(dimensions = config.vector_dimensions, "knowledge collection created");

        for index in &config.payload_indexes {
            let request = CreateFieldIndexCollectionBuilder::new(
                &self.collection_name,
                &index.field_name,
                FieldType::from(&index.field_type),
            );
            self.client
                .create_field_index(request)
                .await
                .map_err(|e| VectorStoreError::PayloadIndexFailed(e.to_string()))?;
            debug!(field = %index.field_name, "payload index created");
        }

        Ok(true)
    }

    #[instrument(skip(self), fields(collection = %self.collection_name))]
    async fn collection_exists(&self) -> Result<bool, VectorStoreError> {
        self.client
            .collection_exists(&self.collection_name)
            .await
            .map_err(unreachable_store)
    }

    #[instrument(skip(self), fields(collection = %self.collection_name))]
    async fn collection_vector_size(&self) -> Result<Option<u64>, VectorStoreError> {
        if !self.collection_exists().await? {
            return Ok(None);
        }

        let described = self
            .client
            .collection_info(&self.collection_name)
            .await
            .map_err(unreachable_store)?;

        Ok(described
            .result
            .and_then(|result| result.config)
            .and_then(|config| config.params)
            .and_then(|params| params.vectors_config)
            .and_then(|vectors_config| match vectors_config.config {
                Some(VectorsConfigKind::Params(params)) => Some(params.size),
                _ => None,
            }))
    }

    #[instrument(skip(self), fields(collection = %self.collection_name))]
    async fn delete_collection(&self) -> Result<(), VectorStoreError> {
        if !self.collection_exists().await? {
            return Ok(());
        }

        self.client
            .delete_collection(&self.collection_name)
            .await
            .map_err(|e| VectorStoreError::CollectionDeletionFailed(e.to_string()))?;

        info!("knowledge collection dropped");
        Ok(())
    }

    #[instrument(skip(self, chunks, embeddings), fields(collection = %self.collection_name, count = chunks.len()))]
    async fn upsert(
        &self,
        chunks: &[Chunk],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError> {
        if chunks.len() != embeddings.len() {
            return Err(VectorStoreError::LengthMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }
        if chunks.is_empty() {
            return Ok(());
        }

        let points: Vec<PointStruct> = chunks
            .iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| {
                PointStruct::new(
                    PointId::from(chunk.id.as_uuid().to_string()),
                    embedding.values.clone(),
                    Self::payload_for(chunk),
                )
            })
            .collect();

        self.client
            .upsert_points(UpsertPointsBuilder::new(&self.collection_name, points).wait(true))
            .await
            .map_err(|e| VectorStoreError::UpsertFailed(e.to_string()))?;

        debug!(points = chunks.len(), "chunks written to knowledge collection");
        Ok(())
    }

    #[instrument(skip(self, embedding), fields(collection = %self.collection_name, top_k = top_k))]
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        let request =
            SearchPointsBuilder::new(&self.collection_name, embedding.values.clone(), top_k as u64)
                .with_payload(true);
        let response = self
            .client
            .search_points(request)
            .await
            .map_err(|e| VectorStoreError::SearchFailed(e.to_string()))?;

        let results: Vec<SearchResult> = response
            .result
            .into_iter()
            .filter_map(|point| {
                let payload = point.payload;
                // Points without text cannot serve as context.
                let text = Self::payload_str(&payload, "text")?;

                let id = match point.id.and_then(|id| id.point_id_options) {
                    Some(PointIdOptions::Uuid(raw)) => uuid::Uuid::parse_str(&raw)
                        .map(ChunkId::from_uuid)
                        .unwrap_or_default(),
                    _ => ChunkId::new(),
                };

                let chunk = Chunk {
                    id,
                    text,
                    source: Self::payload_str(&payload, "source")
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                    language: Self::payload_str(&payload, "language")
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                    position: payload
                        .get("position")
                        .and_then(|v| v.as_integer())
                        .map(|v| v as usize)
                        .unwrap_or_default(),
                };

                Some(SearchResult {
                    chunk,
                    score: point.score,
                })
            })
            .collect();

        debug!(hits = results.len(), "search completed");
        Ok(results)
    }
}

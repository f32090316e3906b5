use std::sync::Arc;

use travel_rag::application::ports::{CollectionConfig, VectorStore};
use travel_rag::application::services::{KnowledgeSeeder, SeedError};
use travel_rag::domain::KnowledgeDocument;
use travel_rag::infrastructure::text_processing::RecursiveCharacterSplitter;

use crate::helpers::{FailingEmbedder, MockEmbedder, MockVectorStore, TEST_DIMENSIONS};

fn document(source: &str, paragraphs: usize) -> KnowledgeDocument {
    let text = (0..paragraphs)
        .map(|i| format!("Paragraph {i} describes a destination in Vietnam."))
        .collect::<Vec<_>>()
        .join("\n\n");
    KnowledgeDocument {
        source: source.to_string(),
        language: "en".to_string(),
        text,
    }
}

fn seeder(store: Arc<MockVectorStore>, dimensions: u64) -> KnowledgeSeeder {
    let vector_store: Arc<dyn VectorStore> = store;
    KnowledgeSeeder::new(
        Arc::new(MockEmbedder),
        vector_store,
        Arc::new(RecursiveCharacterSplitter::new(60, 10).unwrap()),
        CollectionConfig::new(dimensions),
    )
}

#[tokio::test]
async fn given_documents_when_seeding_then_chunks_are_upserted_in_batches() {
    let store = Arc::new(MockVectorStore::default());
    let seeder = seeder(store.clone(), TEST_DIMENSIONS as u64).with_batch_size(2);

    let report = seeder
        .seed(&[document("a_en.txt", 5), document("b_en.txt", 1)])
        .await
        .unwrap();

    assert!(report.collection_created);
    assert_eq!(report.documents, 2);
    let batches = store.upserted_batches();
    assert_eq!(batches.iter().sum::<usize>(), report.chunks);
    assert!(batches.iter().all(|&size| size <= 2));
    assert_eq!(batches, [2, 2, 1, 1]);
}

#[tokio::test]
async fn given_existing_collection_with_other_dimensions_when_seeding_then_fails() {
    let store = Arc::new(MockVectorStore::existing(384));
    let seeder = seeder(store.clone(), 1536);

    let result = seeder.seed(&[document("a_en.txt", 1)]).await;

    assert!(matches!(
        result,
        Err(SeedError::DimensionMismatch {
            expected: 1536,
            actual: 384
        })
    ));
    assert!(store.upserted_batches().is_empty());
}

#[tokio::test]
async fn given_existing_collection_with_same_dimensions_when_seeding_then_reuses_it() {
    let store = Arc::new(MockVectorStore::existing(TEST_DIMENSIONS as u64));
    let seeder = seeder(store.clone(), TEST_DIMENSIONS as u64);

    let report = seeder.seed(&[document("a_en.txt", 1)]).await.unwrap();

    assert!(!report.collection_created);
    assert_eq!(report.chunks, 1);
}

#[tokio::test]
async fn given_existing_collection_when_resetting_then_it_is_dropped() {
    let store = Arc::new(MockVectorStore::existing(384));
    let seeder = seeder(store.clone(), 1536);

    seeder.reset().await.unwrap();
    let report = seeder.seed(&[document("a_en.txt", 1)]).await.unwrap();

    assert!(store.was_deleted());
    assert!(report.collection_created);
}

#[tokio::test]
async fn given_failing_embedder_when_seeding_then_returns_embedding_error() {
    let vector_store: Arc<dyn VectorStore> = Arc::new(MockVectorStore::default());
    let seeder = KnowledgeSeeder::new(
        Arc::new(FailingEmbedder),
        vector_store,
        Arc::new(RecursiveCharacterSplitter::new(60, 10).unwrap()),
        CollectionConfig::new(TEST_DIMENSIONS as u64),
    );

    let result = seeder.seed(&[document("a_en.txt", 2)]).await;

    assert!(matches!(result, Err(SeedError::Embedding(_))));
}

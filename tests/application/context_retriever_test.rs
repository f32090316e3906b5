use std::sync::Arc;

use travel_rag::application::ports::VectorStore;
use travel_rag::application::services::{ContextRetriever, DEFAULT_TOP_K};

use crate::helpers::{
    FailingEmbedder, FailingVectorStore, MockEmbedder, MockVectorStore, RecoveringVectorStore,
    search_hit,
};

#[tokio::test]
async fn given_no_vector_store_when_retrieving_then_context_is_empty() {
    let retriever = ContextRetriever::new(Arc::new(MockEmbedder), None);

    let context = retriever.retrieve("Hanoi street food").await;

    assert!(context.passages.is_empty());
    assert!(context.sources.is_empty());
}

#[tokio::test]
async fn given_hits_when_retrieving_then_passages_keep_rank_order() {
    let store = Arc::new(MockVectorStore::with_hits(vec![
        search_hit("Pho originated in northern Vietnam.", "travel_content_en.txt", "en", 0.92),
        search_hit("Bún chả is grilled pork with noodles.", "travel_content_en.txt", "en", 0.81),
    ]));
    let vector_store: Arc<dyn VectorStore> = store.clone();
    let retriever = ContextRetriever::new(Arc::new(MockEmbedder), Some(vector_store));

    let context = retriever.retrieve("What to eat in Hanoi").await;

    assert_eq!(store.last_top_k(), Some(DEFAULT_TOP_K));
    assert_eq!(
        context.contexts(),
        ["Pho originated in northern Vietnam.", "Bún chả is grilled pork with noodles."]
    );
    assert_eq!(context.sources[0].score, 0.92);
    assert_eq!(context.sources[1].source, "travel_content_en.txt");
}

#[tokio::test]
async fn given_custom_top_k_when_retrieving_then_search_uses_it() {
    let store = Arc::new(MockVectorStore::with_hits(vec![
        search_hit("a", "s", "vi", 0.9),
        search_hit("b", "s", "vi", 0.8),
        search_hit("c", "s", "vi", 0.7),
    ]));
    let vector_store: Arc<dyn VectorStore> = store.clone();
    let retriever = ContextRetriever::new(Arc::new(MockEmbedder), Some(vector_store)).with_top_k(2);

    let context = retriever.retrieve("q").await;

    assert_eq!(store.last_top_k(), Some(2));
    assert_eq!(context.passages.len(), 2);
}

#[tokio::test]
async fn given_long_passage_when_retrieving_then_source_preview_is_truncated() {
    let long_text = "Vịnh Hạ Long ".repeat(30);
    let vector_store: Arc<dyn VectorStore> = Arc::new(MockVectorStore::with_hits(vec![search_hit(
        &long_text,
        "travel_content_vi.txt",
        "vi",
        0.77,
    )]));
    let retriever = ContextRetriever::new(Arc::new(MockEmbedder), Some(vector_store));

    let context = retriever.retrieve("Hạ Long").await;

    let preview = &context.sources[0].content;
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));
    assert_eq!(context.passages[0].text, long_text);
}

#[tokio::test]
async fn given_failing_embedder_when_retrieving_then_context_is_empty() {
    let vector_store: Arc<dyn VectorStore> =
        Arc::new(MockVectorStore::with_hits(vec![search_hit("a", "s", "en", 0.9)]));
    let retriever = ContextRetriever::new(Arc::new(FailingEmbedder), Some(vector_store));

    let context = retriever.retrieve("q").await;

    assert!(context.passages.is_empty());
}

#[tokio::test]
async fn given_failing_search_when_retrieving_then_context_is_empty() {
    let retriever =
        ContextRetriever::new(Arc::new(MockEmbedder), Some(Arc::new(FailingVectorStore)));

    let context = retriever.retrieve_top("q", 3).await;

    assert!(context.passages.is_empty());
    assert!(context.sources.is_empty());
}

#[tokio::test]
async fn given_index_outage_when_index_recovers_then_next_query_gets_context() {
    let vector_store: Arc<dyn VectorStore> = Arc::new(RecoveringVectorStore::new(
        1,
        vec![search_hit("Ba Na Hills has a cable car.", "travel_content_en.txt", "en", 0.88)],
    ));
    let retriever = ContextRetriever::new(Arc::new(MockEmbedder), Some(vector_store));

    let during_outage = retriever.retrieve("Things to do near Da Nang").await;
    let after_recovery = retriever.retrieve("Things to do near Da Nang").await;

    assert!(during_outage.passages.is_empty());
    assert_eq!(after_recovery.contexts(), ["Ba Na Hills has a cable car."]);
}

//! Loads `*.txt` knowledge files into the vector index.
//!
//! Usage: `seed_knowledge [--reset]`. `--reset` drops the collection first.

use std::sync::Arc;

use anyhow::Context;

use travel_rag::application::ports::{CollectionConfig, VectorStore};
use travel_rag::application::services::KnowledgeSeeder;
use travel_rag::infrastructure::llm::EmbedderFactory;
use travel_rag::infrastructure::observability::{TracingConfig, init_tracing};
use travel_rag::infrastructure::persistence::QdrantAdapter;
use travel_rag::infrastructure::text_processing::{TextSplitterFactory, load_knowledge_documents};
use travel_rag::presentation::{Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load configuration")?;
    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let documents = load_knowledge_documents(&settings.seeding.data_dir)
        .await
        .with_context(|| format!("failed to read {}", settings.seeding.data_dir))?;
    if documents.is_empty() {
        anyhow::bail!("no knowledge files found in {}", settings.seeding.data_dir);
    }

    let vector_store: Arc<dyn VectorStore> = Arc::new(QdrantAdapter::new(
        &settings.qdrant.url,
        settings.qdrant.collection_name.clone(),
    )?);

    let seeder = KnowledgeSeeder::new(
        EmbedderFactory::create(&settings.embeddings)?,
        vector_store,
        TextSplitterFactory::create(&settings.seeding)?,
        CollectionConfig::new(settings.qdrant.vector_dimensions),
    )
    .with_batch_size(settings.seeding.batch_size);

    if reset {
        seeder.reset().await?;
    }

    let report = seeder.seed(&documents).await?;
    tracing::info!(
        documents = report.documents,
        chunks = report.chunks,
        collection_created = report.collection_created,
        "Knowledge seeding complete"
    );

    Ok(())
}

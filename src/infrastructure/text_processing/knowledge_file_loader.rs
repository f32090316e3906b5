use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::normalize_knowledge_text;
use crate::domain::KnowledgeDocument;

const KNOWLEDGE_EXTENSION: &str = "txt";
const UNKNOWN_LANGUAGE: &str = "unknown";

/// Language tag from a `_vi` / `_en` stem suffix, e.g. `travel_content_vi.txt`.
pub fn language_from_filename(path: &Path) -> &'static str {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if stem.ends_with("_vi") {
        "vi"
    } else if stem.ends_with("_en") {
        "en"
    } else {
        UNKNOWN_LANGUAGE
    }
}

/// Reads every `*.txt` file directly under `dir`, sorted by file name.
pub async fn load_knowledge_documents(
    dir: impl AsRef<Path>,
) -> Result<Vec<KnowledgeDocument>, KnowledgeLoadError> {
    let dir = dir.as_ref();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| KnowledgeLoadError::Io(dir.to_path_buf(), e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| KnowledgeLoadError::Io(dir.to_path_buf(), e))?
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(KNOWLEDGE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = tokio::fs::read(&path)
            .await
            .map_err(|e| KnowledgeLoadError::Io(path.clone(), e))?;
        let raw = String::from_utf8(raw)
            .map_err(|e| KnowledgeLoadError::NotUtf8(path.clone(), e.to_string()))?;

        let text = normalize_knowledge_text(&raw);
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if text.is_empty() {
            warn!(source = %source, "skipping empty knowledge file");
            continue;
        }

        info!(source = %source, chars = text.chars().count(), "knowledge file loaded");
        documents.push(KnowledgeDocument {
            language: language_from_filename(&path).to_string(),
            source,
            text,
        });
    }

    Ok(documents)
}

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeLoadError {
    #[error("io error on {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("{0} is not valid UTF-8: {1}")]
    NotUtf8(PathBuf, String),
}

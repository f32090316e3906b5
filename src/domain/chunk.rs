use uuid::Uuid;

/// A slice of a knowledge document as stored in the vector index.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    pub source: String,
    pub language: String,
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(text: String, source: &str, language: &str, position: usize) -> Self {
        Self {
            id: ChunkId::new(),
            text,
            source: source.to_string(),
            language: language.to_string(),
            position,
        }
    }
}

/// A raw document handed to the seeder before splitting.
#[derive(Debug, Clone)]
pub struct KnowledgeDocument {
    pub source: String,
    pub language: String,
    pub text: String,
}

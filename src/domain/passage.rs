use super::text::truncate_with_ellipsis;

pub const SOURCE_PREVIEW_CHARS: usize = 200;

/// A passage returned by nearest-neighbour search, best match first.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    pub text: String,
    pub source: String,
    pub language: String,
    pub score: f32,
}

/// Citation-sized view of a [`RetrievedPassage`] shown next to an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSummary {
    pub content: String,
    pub source: String,
    pub language: String,
    pub score: f32,
}

impl From<&RetrievedPassage> for SourceSummary {
    fn from(passage: &RetrievedPassage) -> Self {
        Self {
            content: truncate_with_ellipsis(&passage.text, SOURCE_PREVIEW_CHARS),
            source: passage.source.clone(),
            language: passage.language.clone(),
            score: passage.score,
        }
    }
}

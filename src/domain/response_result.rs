use super::{LinkRecord, SourceSummary};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseResult {
    pub answer: String,
    pub follow_up_questions: Vec<String>,
    pub links: Vec<LinkRecord>,
    pub sources: Vec<SourceSummary>,
}

impl ResponseResult {
    pub fn degraded(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            ..Self::default()
        }
    }
}

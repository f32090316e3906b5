use std::sync::Arc;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::presentation::config::SeedingSettings;

use super::RecursiveCharacterSplitter;

pub struct TextSplitterFactory;

impl TextSplitterFactory {
    pub fn create(settings: &SeedingSettings) -> Result<Arc<dyn TextSplitter>, TextSplitterError> {
        let splitter = RecursiveCharacterSplitter::new(settings.chunk_size, settings.chunk_overlap)?;
        Ok(Arc::new(splitter))
    }
}

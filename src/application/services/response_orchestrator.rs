use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::context_retriever::ContextRetriever;
use super::link_augmentor::{LinkAugmentor, wants_links};
use super::prompt_assembler::assemble_prompt;
use super::prompt_templates::{apology, follow_up_prompt, links_heading};
use crate::application::ports::LlmClient;
use crate::domain::{ChatMessage, Language, LinkRecord, ResponseResult, Turn};

pub const MAX_FOLLOW_UPS: usize = 3;

/// Runs one retrieval-augmented answer. Holds no per-conversation state, so a single
/// instance serves any number of concurrent requests.
pub struct ResponseOrchestrator {
    retriever: ContextRetriever,
    llm_client: Arc<dyn LlmClient>,
    link_augmentor: LinkAugmentor,
}

impl ResponseOrchestrator {
    pub fn new(
        retriever: ContextRetriever,
        llm_client: Arc<dyn LlmClient>,
        link_augmentor: LinkAugmentor,
    ) -> Self {
        Self {
            retriever,
            llm_client,
            link_augmentor,
        }
    }

    /// Always produces a result. When the answer call itself fails the result is the
    /// apology for `language` with no sources, links or follow-ups.
    #[instrument(skip(self, query, history, language), fields(language = %language, history_len = history.len()))]
    pub async fn generate(&self, query: &str, history: &[Turn], language: Language) -> ResponseResult {
        let context = self.retriever.retrieve(query).await;

        let links = if wants_links(query) {
            self.link_augmentor.lookup(query, language)
        } else {
            Vec::new()
        };

        let messages = assemble_prompt(language, &context.contexts(), history, query);

        let mut answer = match self.llm_client.complete(&messages).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, "answer generation failed");
                return ResponseResult::degraded(apology(language));
            }
        };

        let follow_up_questions = self.follow_ups(query, &answer, language).await;

        if !links.is_empty() {
            answer.push_str(&render_links(&links, language));
        }

        info!(
            contexts = context.passages.len(),
            links = links.len(),
            follow_ups = follow_up_questions.len(),
            "response generated"
        );

        ResponseResult {
            answer,
            follow_up_questions,
            links,
            sources: context.sources,
        }
    }

    async fn follow_ups(&self, query: &str, answer: &str, language: Language) -> Vec<String> {
        let prompt = [ChatMessage::user(follow_up_prompt(language, query, answer))];
        match self.llm_client.complete(&prompt).await {
            Ok(reply) => parse_follow_ups(&reply),
            Err(e) => {
                warn!(error = %e, "follow-up generation failed");
                Vec::new()
            }
        }
    }
}

/// Non-blank lines of `reply`, trimmed, at most [`MAX_FOLLOW_UPS`].
pub fn parse_follow_ups(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_FOLLOW_UPS)
        .map(str::to_string)
        .collect()
}

/// Markdown section appended to an answer, one bullet per link.
pub fn render_links(links: &[LinkRecord], language: Language) -> String {
    let mut section = format!("\n\n{}\n", links_heading(language));
    for link in links {
        section.push_str(&format!(
            "- [{}]({}) - {}\n",
            link.title,
            link.url,
            link.type_label()
        ));
    }
    section
}

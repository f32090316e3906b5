use super::prompt_templates::{reference_header, system_prompt};
use crate::domain::{ChatMessage, Language, MessageRole, Turn};

pub const HISTORY_WINDOW: usize = 5;

/// Builds the message sequence for one model call.
///
/// The result always starts with exactly one system message carrying the language
/// instructions (plus a reference block when `contexts` is non-empty), followed by
/// at most [`HISTORY_WINDOW`] prior turns and the query as the final user message.
/// System turns that fall inside the window are dropped, not replaced.
pub fn assemble_prompt(
    language: Language,
    contexts: &[&str],
    history: &[Turn],
    query: &str,
) -> Vec<ChatMessage> {
    let mut system = system_prompt(language).to_string();
    if !contexts.is_empty() {
        system.push_str(&format!(
            "\n{}\n{}\n",
            reference_header(language),
            contexts.join("\n\n")
        ));
    }

    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut messages = Vec::with_capacity(HISTORY_WINDOW + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(
        history[window_start..]
            .iter()
            .filter_map(|turn| match turn.role {
                MessageRole::User => Some(ChatMessage::user(turn.content.clone())),
                MessageRole::Assistant => Some(ChatMessage::assistant(turn.content.clone())),
                MessageRole::System => None,
            }),
    );
    messages.push(ChatMessage::user(query));

    messages
}

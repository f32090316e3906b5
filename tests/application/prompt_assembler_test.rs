use travel_rag::application::services::{HISTORY_WINDOW, assemble_prompt};
use travel_rag::domain::{Language, MessageRole, Turn};

fn alternating_history(len: usize) -> Vec<Turn> {
    (0..len)
        .map(|i| {
            let role = if i % 2 == 0 {
                MessageRole::User
            } else {
                MessageRole::Assistant
            };
            Turn::new(role, format!("turn {i}"))
        })
        .collect()
}

#[test]
fn given_ten_prior_turns_when_assembling_then_only_last_five_are_kept() {
    let history = alternating_history(10);

    let messages = assemble_prompt(Language::En, &[], &history, "What next?");

    assert_eq!(messages.len(), 1 + HISTORY_WINDOW + 1);
    assert_eq!(messages[0].role, MessageRole::System);
    let replayed: Vec<&str> = messages[1..6].iter().map(|m| m.content.as_str()).collect();
    assert_eq!(replayed, ["turn 5", "turn 6", "turn 7", "turn 8", "turn 9"]);
    assert_eq!(messages[1].role, MessageRole::Assistant);
    assert_eq!(messages[6].role, MessageRole::User);
    assert_eq!(messages[6].content, "What next?");
}

#[test]
fn given_no_history_when_assembling_then_returns_system_and_query() {
    let messages = assemble_prompt(Language::Vi, &[], &[], "Xin chào");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, "Xin chào");
}

#[test]
fn given_empty_contexts_when_assembling_then_system_has_no_reference_block() {
    let en = assemble_prompt(Language::En, &[], &[], "q");
    let vi = assemble_prompt(Language::Vi, &[], &[], "q");

    assert!(!en[0].content.contains("Reference information:"));
    assert!(!vi[0].content.contains("Thông tin tham khảo:"));
}

#[test]
fn given_contexts_when_assembling_then_they_are_joined_under_reference_header() {
    let messages = assemble_prompt(
        Language::En,
        &["Hanoi is the capital.", "Pho is a noodle soup."],
        &[],
        "Tell me about Hanoi",
    );

    assert!(messages[0].content.ends_with(
        "\nReference information:\nHanoi is the capital.\n\nPho is a noodle soup.\n"
    ));
}

#[test]
fn given_language_when_assembling_then_system_prompt_matches_it() {
    let en = assemble_prompt(Language::En, &[], &[], "q");
    let vi = assemble_prompt(Language::Vi, &[], &[], "q");

    assert!(en[0].content.starts_with("You are an intelligent travel assistant"));
    assert!(vi[0].content.starts_with("Bạn là một trợ lý du lịch"));
    assert!(vi[0].content.contains("Hãy trả lời bằng tiếng Việt"));
}

#[test]
fn given_system_turn_in_window_when_assembling_then_it_is_dropped() {
    let history = vec![
        Turn::new(MessageRole::User, "hi".to_string()),
        Turn::new(MessageRole::System, "stale instructions".to_string()),
        Turn::new(MessageRole::Assistant, "hello".to_string()),
    ];

    let messages = assemble_prompt(Language::En, &[], &history, "q");

    assert_eq!(messages.len(), 4);
    assert_eq!(
        messages
            .iter()
            .filter(|m| m.role == MessageRole::System)
            .count(),
        1
    );
    assert!(messages.iter().all(|m| m.content != "stale instructions"));
}

use travel_rag::domain::{
    Conversation, DEFAULT_TITLE, Language, MessageRole, PREVIEW_CHARS, title_from_first_message,
};

#[test]
fn given_new_conversation_when_created_then_has_default_title_and_no_turns() {
    let conversation = Conversation::new(Language::En);

    assert_eq!(conversation.title, DEFAULT_TITLE);
    assert!(conversation.turns.is_empty());
    assert_eq!(conversation.created_at, conversation.updated_at);
}

#[test]
fn given_turns_when_pushed_then_timestamps_never_go_backwards() {
    let mut conversation = Conversation::new(Language::Vi);

    for i in 0..20 {
        conversation.push_turn(MessageRole::User, format!("turn {i}"));
    }

    assert!(conversation
        .turns
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));
    assert_eq!(
        conversation.updated_at,
        conversation.turns.last().unwrap().created_at
    );
}

#[test]
fn given_long_last_turn_when_summarised_then_preview_is_cut_without_ellipsis() {
    let mut conversation = Conversation::new(Language::Vi);
    conversation.push_turn(MessageRole::User, "Xin chào".to_string());
    conversation.push_turn(MessageRole::Assistant, "Đà Nẵng ".repeat(30));

    let summary = conversation.summary();

    assert_eq!(summary.message_count, 2);
    assert_eq!(summary.last_message.chars().count(), PREVIEW_CHARS);
    assert!(summary.last_message.starts_with("Đà Nẵng"));
}

#[test]
fn given_empty_conversation_when_summarised_then_preview_is_empty() {
    assert_eq!(Conversation::new(Language::En).summary().last_message, "");
}

#[test]
fn given_rename_when_applied_then_updated_at_advances() {
    let mut conversation = Conversation::new(Language::En);
    let before = conversation.updated_at;

    conversation.rename("Mekong Delta".to_string());

    assert_eq!(conversation.title, "Mekong Delta");
    assert!(conversation.updated_at >= before);
}

#[test]
fn given_short_message_when_deriving_title_then_used_verbatim() {
    assert_eq!(title_from_first_message("Phở ở đâu ngon?"), "Phở ở đâu ngon?");
}

#[test]
fn given_long_message_when_deriving_title_then_first_fifty_chars_plus_ellipsis() {
    let message = "ơ".repeat(60);

    let title = title_from_first_message(&message);

    assert_eq!(title, format!("{}...", "ơ".repeat(50)));
}

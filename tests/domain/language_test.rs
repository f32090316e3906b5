use travel_rag::domain::{ConversationId, Language, MessageRole};

#[test]
fn given_known_tags_when_parsing_language_then_maps_case_insensitively() {
    assert_eq!(Language::from_tag("en"), Language::En);
    assert_eq!(Language::from_tag(" EN "), Language::En);
    assert_eq!(Language::from_tag("vi"), Language::Vi);
}

#[test]
fn given_unknown_tag_when_parsing_language_then_falls_back_to_vietnamese() {
    assert_eq!(Language::from_tag("fr"), Language::Vi);
    assert_eq!(Language::from_tag(""), Language::Vi);
}

#[test]
fn given_json_tag_when_deserializing_language_then_unknown_is_tolerated() {
    let en: Language = serde_json::from_str("\"en\"").unwrap();
    let other: Language = serde_json::from_str("\"de\"").unwrap();

    assert_eq!(en, Language::En);
    assert_eq!(other, Language::Vi);
    assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
}

#[test]
fn given_role_names_when_parsing_then_round_trips_display() {
    for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
        assert_eq!(role.to_string().parse::<MessageRole>().unwrap(), role);
    }
    assert!("narrator".parse::<MessageRole>().is_err());
}

#[test]
fn given_invalid_text_when_parsing_conversation_id_then_fails() {
    assert!("1234".parse::<ConversationId>().is_err());
    let id = ConversationId::new();
    assert_eq!(id.to_string().parse::<ConversationId>().unwrap(), id);
}

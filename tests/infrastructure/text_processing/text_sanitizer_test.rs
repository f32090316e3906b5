use travel_rag::infrastructure::text_processing::normalize_knowledge_text;

#[test]
fn given_decomposed_diacritics_when_normalizing_then_composes_to_nfc() {
    let decomposed = "Ha\u{0300} No\u{0323}\u{0302}i";

    assert_eq!(normalize_knowledge_text(decomposed), "Hà Nội");
}

#[test]
fn given_byte_order_mark_when_normalizing_then_it_is_stripped() {
    assert_eq!(normalize_knowledge_text("\u{feff}Huế"), "Huế");
}

#[test]
fn given_excess_blank_lines_when_normalizing_then_collapses_to_paragraph_break() {
    let input = "paragraph one\r\n\r\n\r\n  \n\nparagraph two";

    assert_eq!(normalize_knowledge_text(input), "paragraph one\n\nparagraph two");
}

#[test]
fn given_repeated_spaces_when_normalizing_then_collapses_within_lines() {
    let input = "  Phở   bò \t tái  \nline   two ";

    assert_eq!(normalize_knowledge_text(input), "Phở bò tái\nline two");
}

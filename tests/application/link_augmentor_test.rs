use std::sync::Arc;

use travel_rag::application::services::{
    LINK_TRIGGER_KEYWORDS, LinkAugmentor, MAX_LINKS, wants_links,
};
use travel_rag::domain::{Language, TopicLinkTable};

use crate::helpers::topic_entry;

#[test]
fn given_keyword_match_when_looking_up_then_returns_topic_links() {
    let table = TopicLinkTable::new(vec![topic_entry("map", &["hanoi"], 2)]);
    let augmentor = LinkAugmentor::new(Arc::new(table));

    let links = augmentor.lookup("Show me a map of Hanoi", Language::En);

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].title, "map 1");
}

#[test]
fn given_keyword_only_when_looking_up_then_entry_still_matches() {
    let table = TopicLinkTable::new(vec![topic_entry("hanoi", &["hà nội"], 1)]);
    let augmentor = LinkAugmentor::new(Arc::new(table));

    let links = augmentor.lookup("Tìm bản đồ HÀ NỘI", Language::Vi);

    assert_eq!(links.len(), 1);
}

#[test]
fn given_two_matching_entries_when_looking_up_then_first_five_in_table_order() {
    let table = TopicLinkTable::new(vec![
        topic_entry("hanoi", &[], 4),
        topic_entry("pho", &[], 3),
    ]);
    let augmentor = LinkAugmentor::new(Arc::new(table));

    let links = augmentor.lookup("hanoi pho links", Language::En);

    assert_eq!(links.len(), MAX_LINKS);
    let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["hanoi 1", "hanoi 2", "hanoi 3", "hanoi 4", "pho 1"]);
}

#[test]
fn given_no_matching_entry_when_looking_up_then_returns_empty() {
    let table = TopicLinkTable::new(vec![topic_entry("sapa", &["fansipan"], 3)]);
    let augmentor = LinkAugmentor::new(Arc::new(table));

    assert!(augmentor.lookup("website for Hue", Language::En).is_empty());
}

#[test]
fn given_empty_table_when_looking_up_then_returns_empty() {
    assert!(LinkAugmentor::empty().lookup("hanoi maps", Language::En).is_empty());
}

#[test]
fn given_trigger_keywords_when_checking_then_link_intent_is_detected() {
    assert!(wants_links("Any good WEBSITE for Hue?"));
    assert!(wants_links("Can you recommend a blog"));
    assert!(wants_links("Giới thiệu Hội An"));
    assert!(wants_links("tìm khách sạn"));
}

#[test]
fn given_plain_question_when_checking_then_no_link_intent() {
    assert!(!wants_links("What should I eat in Hue?"));
    assert!(!wants_links("Thời tiết Đà Lạt thế nào?"));
}

#[test]
fn given_trigger_keyword_table_when_read_then_matches_published_list() {
    assert_eq!(
        LINK_TRIGGER_KEYWORDS,
        ["link", "website", "maps", "blog", "video", "xem", "tìm", "giới thiệu", "recommend"]
    );
}

#[test]
fn given_each_trigger_keyword_when_checking_then_it_alone_signals_link_intent() {
    let queries = [
        ("link", "Send me a LINK about Hue"),
        ("website", "Official website of Phong Nha?"),
        ("maps", "Google Maps for Old Quarter"),
        ("blog", "A blog about Ha Giang loop"),
        ("video", "Video of Ha Long Bay"),
        ("xem", "Cho tôi xem ảnh Sa Pa"),
        ("tìm", "Tìm homestay ở Mộc Châu"),
        ("giới thiệu", "Giới thiệu về Côn Đảo"),
        ("recommend", "Recommend hotels in Quy Nhon"),
    ];

    for (keyword, query) in queries {
        assert!(wants_links(query), "{keyword} should trigger links in {query:?}");
    }
}

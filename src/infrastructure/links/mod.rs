mod topic_link_loader;

pub use topic_link_loader::{LinkTableError, load_topic_links, parse_topic_links};

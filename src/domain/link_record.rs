use serde::{Deserialize, Serialize};

pub const DEFAULT_LINK_TYPE: &str = "Link";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    pub title: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl LinkRecord {
    pub fn new(url: &str, title: &str, link_type: Option<&str>) -> Self {
        Self {
            url: url.to_string(),
            title: title.to_string(),
            link_type: link_type.map(str::to_string),
        }
    }

    pub fn type_label(&self) -> &str {
        self.link_type.as_deref().unwrap_or(DEFAULT_LINK_TYPE)
    }
}

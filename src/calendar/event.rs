use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "black";

/// One entry of the calendar document's `events` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

impl EventRecord {
    pub fn new(date: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            name: name.into(),
            title: None,
            color: None,
            data_info: None,
            data_location: None,
            data_category: None,
            data_url: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = Some(url.into());
        self
    }

    pub fn tooltip(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn color_class(&self) -> String {
        format!("event-{}", self.color.as_deref().unwrap_or(DEFAULT_COLOR))
    }

    /// `#` is a placeholder in the source data and never becomes a link.
    pub fn link(&self) -> Option<&str> {
        self.data_url.as_deref().filter(|url| *url != "#")
    }

    /// Auxiliary attributes keyed by their `data-*` suffix.
    pub fn metadata(&self) -> Vec<(&'static str, &str)> {
        [
            ("info", &self.data_info),
            ("location", &self.data_location),
            ("category", &self.data_category),
            ("url", &self.data_url),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

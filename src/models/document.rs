use serde::Deserialize;

/// A single post as consumed by the pipeline. Only the title is analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    pub title: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl From<&str> for Document {
    fn from(title: &str) -> Self {
        Document::new(title)
    }
}

impl From<String> for Document {
    fn from(title: String) -> Self {
        Document::new(title)
    }
}

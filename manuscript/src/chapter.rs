use serde::{Deserialize, Serialize};

/// A titled slice of a manuscript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRecord {
    pub title: String,
    pub content: String,
}

impl ChapterRecord {
    /// Create a new chapter record.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Number of `\n`-separated lines in the content.
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Approximate word count of the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

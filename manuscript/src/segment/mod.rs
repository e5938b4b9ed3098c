//! Chapter segmentation: keyword markers first, blank-line runs as fallback.

mod markers;
mod paragraph;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chapter::ChapterRecord;
use crate::config::SegmenterConfig;
use crate::error::{Result, SplitError};
use crate::split::split_at_with_labels;

/// Which segmentation strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Chapter marker keywords only
    Keyword,
    /// Blank-line runs only
    Paragraph,
    /// Keyword markers, falling back to blank-line runs when none are found
    #[default]
    Auto,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Keyword => "keyword",
            Method::Paragraph => "paragraph",
            Method::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyword" | "markers" => Ok(Method::Keyword),
            "paragraph" | "blank" => Ok(Method::Paragraph),
            "auto" => Ok(Method::Auto),
            other => Err(format!(
                "Unknown method '{}'. Expected keyword, paragraph or auto",
                other
            )),
        }
    }
}

/// How a segmentation was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentOutcome {
    /// Split at chapter markers
    Markers { count: usize },
    /// Split at blank-line runs
    BlankLineRuns { parts: usize },
    /// Nothing to split on; the whole text is one chapter
    SingleBlock,
}

impl SegmentOutcome {
    /// A short status line suitable for showing to the user.
    pub fn describe(&self) -> String {
        match self {
            SegmentOutcome::Markers { count } => {
                format!("Found {} chapter marker{}", count, plural(*count))
            }
            SegmentOutcome::BlankLineRuns { parts } => {
                format!("Split into {} part{} at blank-line runs", parts, plural(*parts))
            }
            SegmentOutcome::SingleBlock => {
                "No chapter markers found, imported as a single block".to_string()
            }
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// The result of segmenting a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub chapters: Vec<ChapterRecord>,
    pub outcome: SegmentOutcome,
}

/// Splits reflowed text into chapters.
///
/// The marker regex is compiled once at construction.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    marker_regex: Regex,
}

impl Segmenter {
    /// Create a segmenter, compiling the configured markers.
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        let marker_regex = markers::build_marker_regex(&config.markers, config.line_start_only)?;
        Ok(Self {
            config,
            marker_regex,
        })
    }

    /// The configuration this segmenter was built with.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment `text` with the given strategy.
    ///
    /// Never fails: when the chosen strategy finds nothing to split on, the
    /// whole text becomes a single chapter.
    pub fn segment(&self, text: &str, method: Method) -> Segmentation {
        log::debug!("segmenting {} bytes with {} strategy", text.len(), method);

        match method {
            Method::Keyword => self
                .by_markers(text)
                .unwrap_or_else(|| self.single_block(text, &self.config.labels.no_markers)),
            Method::Paragraph => self
                .by_blank_runs(text)
                .unwrap_or_else(|| self.single_block(text, &self.config.labels.single_block)),
            Method::Auto => self
                .by_markers(text)
                .or_else(|| {
                    log::debug!("no chapter markers, trying blank-line runs");
                    self.by_blank_runs(text)
                })
                .unwrap_or_else(|| self.single_block(text, &self.config.labels.single_block)),
        }
    }

    /// Split one chapter in two, using this segmenter's labels.
    pub fn split_at(
        &self,
        chapters: &[ChapterRecord],
        index: usize,
        line_number: usize,
        new_title: Option<&str>,
    ) -> std::result::Result<Vec<ChapterRecord>, SplitError> {
        split_at_with_labels(chapters, index, line_number, new_title, &self.config.labels)
    }

    fn by_markers(&self, text: &str) -> Option<Segmentation> {
        markers::split_on_markers(text, &self.marker_regex, &self.config).map(|chapters| {
            let count = chapters.len();
            Segmentation {
                chapters,
                outcome: SegmentOutcome::Markers { count },
            }
        })
    }

    fn by_blank_runs(&self, text: &str) -> Option<Segmentation> {
        paragraph::split_on_blank_runs(text, &self.config).map(|chapters| {
            let parts = chapters.len();
            Segmentation {
                chapters,
                outcome: SegmentOutcome::BlankLineRuns { parts },
            }
        })
    }

    fn single_block(&self, text: &str, title: &str) -> Segmentation {
        Segmentation {
            chapters: vec![ChapterRecord::new(title, text)],
            outcome: SegmentOutcome::SingleBlock,
        }
    }
}

/// Shared segmenter with the built-in configuration.
static DEFAULT_SEGMENTER: Lazy<Segmenter> = Lazy::new(|| {
    Segmenter::new(SegmenterConfig::default()).expect("built-in chapter markers should compile")
});

/// Segment `text` with the built-in configuration.
pub fn segment(text: &str, method: Method) -> Vec<ChapterRecord> {
    DEFAULT_SEGMENTER.segment(text, method).chapters
}

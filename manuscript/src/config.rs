//! Segmenter configuration: marker keywords, fallback labels, thresholds.

use serde::{Deserialize, Serialize};

/// Default cutoff for using a part's first line as its title.
const DEFAULT_MAX_TITLE_CHARS: usize = 60;

/// A chapter marker keyword for one language.
///
/// Most keywords precede their number ("Chapter 3"). CJK headings put the
/// number first ("第3章"), which `number_first` selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerPattern {
    /// Language tag, informational only (e.g. "en", "es", "zh")
    pub language: String,
    /// Literal keyword, matched case-insensitively
    pub keyword: String,
    /// Whether the number comes before the keyword
    #[serde(default)]
    pub number_first: bool,
}

impl MarkerPattern {
    /// Create a keyword-then-number marker.
    pub fn new(language: &str, keyword: &str) -> Self {
        Self {
            language: language.to_string(),
            keyword: keyword.to_string(),
            number_first: false,
        }
    }

    /// Create a number-then-keyword marker.
    pub fn number_first(language: &str, keyword: &str) -> Self {
        Self {
            number_first: true,
            ..Self::new(language, keyword)
        }
    }
}

/// The built-in marker set.
pub fn default_markers() -> Vec<MarkerPattern> {
    vec![
        MarkerPattern::new("en", "Chapter"),
        MarkerPattern::new("es", "Capítulo"),
        MarkerPattern::new("fr", "Chapitre"),
        MarkerPattern::new("de", "Kapitel"),
        MarkerPattern::new("en", "Part"),
        MarkerPattern::new("en", "Lesson"),
        MarkerPattern::new("en", "Section"),
        MarkerPattern::number_first("zh", "章"),
    ]
}

/// Labels used when a title has to be synthesized.
///
/// Different ingestion screens word their fallbacks differently; the presets
/// below capture each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSet {
    /// Title of the single chapter when no marker is found
    pub no_markers: String,
    /// Title of the single chapter when no blank-line runs are found
    pub single_block: String,
    /// Prefix for numbered blank-line parts ("Section 2")
    pub section_prefix: String,
    /// Prefix for canonical numeric headings and default split titles
    pub chapter_prefix: String,
    /// Title of the second half of a manual split
    pub remaining: String,
    /// Title of text found before the first marker
    pub preamble: String,
}

impl LabelSet {
    /// Labels used by the main content processor.
    pub fn content_processor() -> Self {
        Self {
            no_markers: "Full Content".to_string(),
            single_block: "Full Content".to_string(),
            section_prefix: "Section".to_string(),
            chapter_prefix: "Chapter".to_string(),
            remaining: "Remaining Content".to_string(),
            preamble: "Preface".to_string(),
        }
    }

    /// Labels used by the bulk translation importer.
    pub fn bulk_translation() -> Self {
        Self {
            no_markers: "Translated Content".to_string(),
            single_block: "Translated Content (Single Chapter)".to_string(),
            section_prefix: "Part".to_string(),
            ..Self::content_processor()
        }
    }

    /// Labels used by the chapter editor.
    pub fn editor() -> Self {
        Self {
            no_markers: "Full Text / Unsorted".to_string(),
            single_block: "Full Text / Unsorted".to_string(),
            ..Self::content_processor()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "content" | "content-processor" => Some(Self::content_processor()),
            "translation" | "bulk-translation" => Some(Self::bulk_translation()),
            "editor" => Some(Self::editor()),
            _ => None,
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::content_processor()
    }
}

/// Configuration for [`Segmenter`](crate::Segmenter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Marker keywords recognized by the keyword strategy
    #[serde(default = "default_markers")]
    pub markers: Vec<MarkerPattern>,

    /// Fallback labels
    #[serde(default)]
    pub labels: LabelSet,

    /// First lines at least this long are not used as titles
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    /// Only recognize markers at the start of a line
    #[serde(default)]
    pub line_start_only: bool,

    /// Keep non-blank text before the first marker as its own chapter
    #[serde(default = "default_keep_preamble")]
    pub keep_preamble: bool,
}

fn default_max_title_chars() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

fn default_keep_preamble() -> bool {
    true
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            labels: LabelSet::default(),
            max_title_chars: default_max_title_chars(),
            line_start_only: false,
            keep_preamble: default_keep_preamble(),
        }
    }
}

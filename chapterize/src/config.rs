//! chapterize configuration management.

use anyhow::{Context, Result};
use manuscript::{LabelSet, MarkerPattern, Method, SegmenterConfig, DEFAULT_MAX_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LABELS: &str = "content";
const DEFAULT_MAX_TITLE_CHARS: usize = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterizeConfig {
    /// Reflow width in characters
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    /// Default segmentation method (auto, keyword, paragraph)
    #[serde(default)]
    pub method: Method,

    /// Fallback label preset (content, translation, editor)
    #[serde(default = "default_labels")]
    pub labels: String,

    /// First lines this long or longer are not used as titles
    #[serde(default = "default_max_title_chars")]
    pub max_title_chars: usize,

    /// Only recognize chapter markers at the start of a line
    #[serde(default)]
    pub line_start_only: bool,

    /// Keep text before the first marker as its own chapter
    #[serde(default = "default_keep_preamble")]
    pub keep_preamble: bool,

    /// Markers recognized in addition to the built-in set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_markers: Vec<MarkerPattern>,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

fn default_labels() -> String {
    DEFAULT_LABELS.to_string()
}

fn default_max_title_chars() -> usize {
    DEFAULT_MAX_TITLE_CHARS
}

fn default_keep_preamble() -> bool {
    true
}

impl Default for ChapterizeConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            method: Method::default(),
            labels: default_labels(),
            max_title_chars: default_max_title_chars(),
            line_start_only: false,
            keep_preamble: default_keep_preamble(),
            extra_markers: Vec::new(),
        }
    }
}

impl ChapterizeConfig {
    /// Get the config file path: ~/.config/cli-programs/chapterize.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("chapterize.toml"))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, returning default if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ChapterizeConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the segmenter configuration described by this file.
    pub fn segmenter_config(&self) -> Result<SegmenterConfig> {
        let labels = LabelSet::preset(&self.labels).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown label preset '{}'. Expected content, translation or editor",
                self.labels
            )
        })?;

        let mut markers = manuscript::default_markers();
        markers.extend(self.extra_markers.iter().cloned());

        Ok(SegmenterConfig {
            markers,
            labels,
            max_title_chars: self.max_title_chars,
            line_start_only: self.line_start_only,
            keep_preamble: self.keep_preamble,
        })
    }
}

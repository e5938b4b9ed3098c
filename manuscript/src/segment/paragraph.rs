//! Paragraph strategy: split at runs of blank lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chapter::ChapterRecord;
use crate::config::SegmenterConfig;

/// Two or more consecutive blank (or whitespace-only) lines.
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").unwrap());

/// Split `text` at blank-line runs.
///
/// Returns `None` when the text forms a single part.
pub(crate) fn split_on_blank_runs(text: &str, config: &SegmenterConfig) -> Option<Vec<ChapterRecord>> {
    let parts: Vec<&str> = BLANK_RUN
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    log::debug!("blank-line split produced {} parts", parts.len());

    if parts.len() < 2 {
        return None;
    }

    let chapters = parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| ChapterRecord::new(part_title(part, i, config), part))
        .collect();

    Some(chapters)
}

/// Title a part from its first line, or number it when that line is unusable.
fn part_title(part: &str, index: usize, config: &SegmenterConfig) -> String {
    let first_line = part.lines().next().unwrap_or_default().trim();
    if !first_line.is_empty() && first_line.chars().count() < config.max_title_chars {
        first_line.to_string()
    } else {
        format!("{} {}", config.labels.section_prefix, index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_two_blank_lines() {
        let config = SegmenterConfig::default();
        let text = "Intro text\n\n\nSecond part\n\n\nThird part";
        let chapters = split_on_blank_runs(text, &config).unwrap();
        let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro text", "Second part", "Third part"]);
        assert_eq!(chapters[1].content, "Second part");
    }

    #[test]
    fn test_single_blank_line_is_not_a_boundary() {
        let config = SegmenterConfig::default();
        assert!(split_on_blank_runs("One\n\nTwo", &config).is_none());
    }

    #[test]
    fn test_whitespace_only_lines_count_as_blank() {
        let config = SegmenterConfig::default();
        let chapters = split_on_blank_runs("One\n  \n\t\nTwo", &config).unwrap();
        assert_eq!(chapters.len(), 2);
    }

    #[test]
    fn test_long_first_line_gets_numbered_title() {
        let config = SegmenterConfig::default();
        let long_line = "word ".repeat(20);
        let text = format!("Short title\nbody\n\n\n{}\nmore body", long_line.trim());
        let chapters = split_on_blank_runs(&text, &config).unwrap();
        assert_eq!(chapters[0].title, "Short title");
        assert_eq!(chapters[1].title, "Section 2");
        assert!(chapters[1].content.starts_with("word word"));
    }

    #[test]
    fn test_leading_and_trailing_runs_ignored() {
        let config = SegmenterConfig::default();
        let chapters = split_on_blank_runs("\n\n\nA\n\n\nB\n\n\n\n", &config).unwrap();
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].content, "A");
        assert_eq!(chapters[1].content, "B");
    }

    #[test]
    fn test_title_cutoff_is_configurable() {
        let config = SegmenterConfig {
            max_title_chars: 5,
            ..SegmenterConfig::default()
        };
        let chapters = split_on_blank_runs("Tiny\n\n\nLonger", &config).unwrap();
        assert_eq!(chapters[0].title, "Tiny");
        assert_eq!(chapters[1].title, "Section 2");
    }
}

//! Keyword strategy: split at multilingual chapter markers.

use regex::Regex;

use crate::chapter::ChapterRecord;
use crate::config::{MarkerPattern, SegmenterConfig};
use crate::error::{ManuscriptError, Result};

/// ASCII or full-width digits.
const NUMBER: &str = r"[0-9０-９]+";

/// Spelled-out number words ("One", "Twenty-Two").
const NUMBER_WORDS: &str = "one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\
     thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|\
     fifty|sixty|seventy|eighty|ninety|hundred";

/// Roman numeral digit groups, uppercase only. Each group is non-empty.
const ROMAN_THOUSANDS: &str = "M{1,3}";
const ROMAN_HUNDREDS: &str = "(?:CM|CD|D?C{1,3}|D)";
const ROMAN_TENS: &str = "(?:XC|XL|L?X{1,3}|L)";
const ROMAN_UNITS: &str = "(?:IX|IV|V?I{1,3}|V)";

/// Units that are not a bare "I", which reads as a pronoun in prose.
const ROMAN_UNITS_NOT_I: &str = "(?:IX|IV|VI{0,3}|II{1,2})";

/// What must follow a bare "I" label: end of line, end of text or punctuation.
const HEADING_END: &str = r"[ \t]*(?:[:：.\-]|\n|\z)";

/// CJK numerals for number-first headings ("第三章").
const CJK_NUMBER: &str = r"[一二三四五六七八九十百千零〇两]+";

/// What may follow a keyword-then-label marker.
const TERMINATOR: &str = r"(?:[:：\-\s]|\z)";

/// Build the combined marker regex from the configured patterns.
pub(crate) fn build_marker_regex(markers: &[MarkerPattern], line_start_only: bool) -> Result<Regex> {
    if markers.is_empty() {
        return Err(ManuscriptError::NoMarkers);
    }

    let alternatives: Vec<String> = markers.iter().map(marker_alternative).collect();
    let anchor = if line_start_only { r"^[ \t]*" } else { "" };
    let pattern = format!("(?im){}(?:{})", anchor, alternatives.join("|"));

    Ok(Regex::new(&pattern)?)
}

fn marker_alternative(marker: &MarkerPattern) -> String {
    let keyword = regex::escape(marker.keyword.trim());
    if marker.number_first {
        // CJK text has no word spacing, so no boundary or terminator.
        // The 第 prefix is required: "这一章" is prose, "第一章" a heading.
        format!(r"第[ \t]*(?:{NUMBER}|{CJK_NUMBER})[ \t]*{keyword}")
    } else {
        let words = format!("(?:{NUMBER_WORDS})(?:-(?:{NUMBER_WORDS}))*");
        format!(
            r"\b{keyword}(?:(?:[ \t]*{NUMBER}|[ \t]+{words}|[ \t]+{roman}){TERMINATOR}|[ \t]+(?-i:I){HEADING_END})",
            roman = roman_numeral()
        )
    }
}

/// A non-empty, well-formed uppercase Roman numeral other than a bare "I".
fn roman_numeral() -> String {
    format!(
        "(?-i:{ROMAN_THOUSANDS}{ROMAN_HUNDREDS}?{ROMAN_TENS}?{ROMAN_UNITS}?\
         |{ROMAN_HUNDREDS}{ROMAN_TENS}?{ROMAN_UNITS}?\
         |{ROMAN_TENS}{ROMAN_UNITS}?\
         |{ROMAN_UNITS_NOT_I})"
    )
}

/// Split `text` at every marker match.
///
/// Returns `None` when there is no match, leaving the fallback to the caller.
pub(crate) fn split_on_markers(
    text: &str,
    regex: &Regex,
    config: &SegmenterConfig,
) -> Option<Vec<ChapterRecord>> {
    let starts: Vec<usize> = regex
        .find_iter(text)
        .map(|m| {
            log::debug!("chapter marker {:?} at offset {}", m.as_str(), m.start());
            m.start()
        })
        .collect();

    let first = *starts.first()?;
    let mut chapters = Vec::with_capacity(starts.len() + 1);

    let preamble = text[..first].trim();
    if config.keep_preamble && !preamble.is_empty() {
        chapters.push(ChapterRecord::new(config.labels.preamble.as_str(), preamble));
    }

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        chapters.push(chapter_from_span(&text[start..end], config));
    }

    Some(chapters)
}

/// Turn one marker span into a chapter: heading line becomes the title.
fn chapter_from_span(span: &str, config: &SegmenterConfig) -> ChapterRecord {
    let (heading, rest) = span.split_once('\n').unwrap_or((span, ""));
    let heading = heading.trim();

    let title = if !heading.is_empty() && heading.chars().all(|c| c.is_numeric()) {
        format!("{} {}", config.labels.chapter_prefix, heading)
    } else {
        heading.to_string()
    };

    let body = rest.trim();
    let content = if body.is_empty() { span.trim() } else { body };

    ChapterRecord::new(title, content)
}

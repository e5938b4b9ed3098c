//! Manual point split: divide one chapter in two at a line number.

use crate::chapter::ChapterRecord;
use crate::config::LabelSet;
use crate::error::SplitError;

/// Split the chapter at `index` after `line_number` lines, with default labels.
///
/// See [`split_at_with_labels`].
pub fn split_at(
    chapters: &[ChapterRecord],
    index: usize,
    line_number: usize,
    new_title: Option<&str>,
) -> Result<Vec<ChapterRecord>, SplitError> {
    split_at_with_labels(chapters, index, line_number, new_title, &LabelSet::default())
}

/// Split the chapter at `index` after `line_number` lines.
///
/// # Arguments
/// * `chapters` - The current chapter list (left untouched)
/// * `index` - Position of the chapter to split
/// * `line_number` - 1-based count of lines kept in the first part; both parts
///   must keep at least one line
/// * `new_title` - Title for the first part; blank falls back to
///   "{chapter_prefix} {index + 1}"
/// * `labels` - Supplies the fallback prefix and the second part's title
///
/// # Returns
/// A new list, one longer, with the chapter replaced by its two parts.
pub fn split_at_with_labels(
    chapters: &[ChapterRecord],
    index: usize,
    line_number: usize,
    new_title: Option<&str>,
    labels: &LabelSet,
) -> Result<Vec<ChapterRecord>, SplitError> {
    let target = chapters.get(index).ok_or(SplitError::NoSuchChapter {
        index,
        count: chapters.len(),
    })?;

    if line_number == 0 {
        return Err(SplitError::MissingLine);
    }

    let lines: Vec<&str> = target.content.split('\n').collect();
    let total = lines.len();

    if total < 2 {
        return Err(SplitError::TooShort { total });
    }
    if line_number >= total {
        return Err(SplitError::LineOutOfRange {
            line: line_number,
            total,
        });
    }

    let title = new_title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("{} {}", labels.chapter_prefix, index + 1));

    let first = ChapterRecord::new(title, lines[..line_number].join("\n"));
    let second = ChapterRecord::new(labels.remaining.as_str(), lines[line_number..].join("\n"));

    log::debug!(
        "split chapter {} at line {} of {}",
        index,
        line_number,
        total
    );

    let mut result = Vec::with_capacity(chapters.len() + 1);
    result.extend_from_slice(&chapters[..index]);
    result.push(first);
    result.push(second);
    result.extend_from_slice(&chapters[index + 1..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn chapter(title: &str, content: &str) -> ChapterRecord {
        ChapterRecord::new(title, content)
    }

    #[test]
    fn test_split_with_title() {
        let chapters = vec![chapter("Ch1", "L1\nL2\nL3\nL4")];
        let result = split_at(&chapters, 0, 2, Some("Part A")).unwrap();
        assert_eq!(
            result,
            vec![chapter("Part A", "L1\nL2"), chapter("Remaining Content", "L3\nL4")]
        );
    }

    #[test]
    fn test_split_line_past_end() {
        let chapters = vec![chapter("Ch1", "L1\nL2")];
        let err = split_at(&chapters, 0, 5, None).unwrap_err();
        assert_eq!(err, SplitError::LineOutOfRange { line: 5, total: 2 });
        assert!(err.to_string().contains("between 1 and 1"));
    }

    #[test]
    fn test_split_line_equal_to_total_rejected() {
        let chapters = vec![chapter("Ch1", "L1\nL2\nL3")];
        assert!(split_at(&chapters, 0, 3, None).is_err());
    }

    #[test]
    fn test_split_zero_line_rejected() {
        let chapters = vec![chapter("Ch1", "L1\nL2")];
        assert_eq!(split_at(&chapters, 0, 0, None), Err(SplitError::MissingLine));
    }

    #[test]
    fn test_split_single_line_chapter_rejected() {
        let chapters = vec![chapter("Ch1", "only line")];
        assert_eq!(
            split_at(&chapters, 0, 1, None),
            Err(SplitError::TooShort { total: 1 })
        );
    }

    #[test]
    fn test_split_bad_index() {
        let chapters = vec![chapter("Ch1", "L1\nL2")];
        assert_eq!(
            split_at(&chapters, 3, 1, None),
            Err(SplitError::NoSuchChapter { index: 3, count: 1 })
        );
    }

    #[test]
    fn test_blank_title_uses_position() {
        let chapters = vec![chapter("A", "a"), chapter("B", "b1\nb2")];
        let result = split_at(&chapters, 1, 1, Some("   ")).unwrap();
        assert_eq!(result[1].title, "Chapter 2");
        assert_eq!(result[2].title, "Remaining Content");
    }

    #[test]
    fn test_split_preserves_neighbours() {
        let chapters = vec![chapter("A", "a"), chapter("B", "b1\nb2\nb3"), chapter("C", "c")];
        let result = split_at(&chapters, 1, 1, Some("B1")).unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result[0], chapters[0]);
        assert_eq!(result[1], chapter("B1", "b1"));
        assert_eq!(result[2], chapter("Remaining Content", "b2\nb3"));
        assert_eq!(result[3], chapters[2]);
    }

    #[test]
    fn test_resplit_remaining_part() {
        let chapters = vec![chapter("Ch1", "1\n2\n3\n4\n5")];
        let once = split_at(&chapters, 0, 1, Some("One")).unwrap();
        let twice = split_at(&once, 1, 2, Some("Two and three")).unwrap();
        assert_eq!(twice.len(), 3);
        assert_eq!(twice[1].content, "2\n3");
        assert_eq!(twice[2].content, "4\n5");
    }

    #[test]
    fn test_translation_labels() {
        let labels = LabelSet::bulk_translation();
        let chapters = vec![chapter("Ch1", "a\nb")];
        let result = split_at_with_labels(&chapters, 0, 1, None, &labels).unwrap();
        assert_eq!(result[0].title, "Chapter 1");
        assert_eq!(result[1].title, labels.remaining);
    }

    proptest! {
        #[test]
        fn prop_valid_split_adds_one_chapter(
            lines in prop::collection::vec("[a-z]{0,10}", 2..20),
            others in prop::collection::vec("[a-z\n]{0,20}", 0..4),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut chapters: Vec<ChapterRecord> =
                others.iter().map(|c| chapter("other", c)).collect();
            let index = chapters.len() / 2;
            chapters.insert(index, chapter("target", &lines.join("\n")));

            let line_number = 1 + pick.index(lines.len() - 1);
            let result = split_at(&chapters, index, line_number, None).unwrap();

            prop_assert_eq!(result.len(), chapters.len() + 1);
            prop_assert_eq!(&result[..index], &chapters[..index]);
            prop_assert_eq!(&result[index + 2..], &chapters[index + 1..]);
            prop_assert_eq!(
                format!("{}\n{}", result[index].content, result[index + 1].content),
                chapters[index].content.clone()
            );
        }

        #[test]
        fn prop_out_of_range_split_is_rejected(
            lines in prop::collection::vec("[a-z]{0,10}", 1..10),
            extra in 0usize..5,
        ) {
            let chapters = vec![chapter("target", &lines.join("\n"))];
            prop_assert!(split_at(&chapters, 0, lines.len() + extra, None).is_err());
            prop_assert!(split_at(&chapters, 0, 0, None).is_err());
        }
    }
}
